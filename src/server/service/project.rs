//! Project business logic, following the same ownership and relation rules as articles.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        project::ProjectRepository, project_like::ProjectLikeRepository,
        project_subscribe::ProjectSubscribeRepository,
    },
    error::AppError,
    middleware::auth::ensure_owner,
    model::{
        image::ImageFileType,
        project::{
            CreateProjectParams, NewProject, Project, ProjectChanges, ProjectWithCounts,
            UpdateProjectParams,
        },
        user::User,
    },
    service::{
        image::ImageStore,
        lookup_error,
        relation::{RelationKind, RelationRef},
    },
};

const THUMBNAIL: ImageFileType = ImageFileType::ProjectThumbnailImage;

pub struct ProjectService<'a, S: ImageStore> {
    db: &'a DatabaseConnection,
    images: &'a S,
}

impl<'a, S: ImageStore> ProjectService<'a, S> {
    pub fn new(db: &'a DatabaseConnection, images: &'a S) -> Self {
        Self { db, images }
    }

    /// Gets every project with its current like and subscription counts.
    pub async fn get_all(&self) -> Result<Vec<ProjectWithCounts>, AppError> {
        let projects = ProjectRepository::new(self.db).get_all().await?;
        let likes = ProjectLikeRepository::new(self.db).count_per_project().await?;
        let subscribes = ProjectSubscribeRepository::new(self.db)
            .count_per_project()
            .await?;

        Ok(projects
            .into_iter()
            .map(|project| ProjectWithCounts {
                like_count: likes.get(&project.id).copied().unwrap_or(0),
                subscribe_count: subscribes.get(&project.id).copied().unwrap_or(0),
                project,
            })
            .collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Project, AppError> {
        ProjectRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))
    }

    pub async fn create(
        &self,
        actor: &User,
        params: CreateProjectParams,
    ) -> Result<Project, AppError> {
        let thumbnail_image_uri = match &params.thumbnail {
            Some(file) => self.images.save_thumbnail(THUMBNAIL, file).await?,
            None => String::new(),
        };

        let project = ProjectRepository::new(self.db)
            .create(NewProject {
                user_id: actor.id,
                title: params.title,
                description: params.description,
                thumbnail_image_uri,
            })
            .await?;

        tracing::debug!("User {} created project {}", actor.id, project.id);

        Ok(project)
    }

    /// Updates the supplied fields of a project owned by `actor`.
    ///
    /// # Returns
    /// - `Ok(Project)` - The updated project
    /// - `Err(AppError::NotFound)` - No project with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - `actor` is not the owner
    pub async fn update(
        &self,
        id: i32,
        actor: &User,
        params: UpdateProjectParams,
    ) -> Result<Project, AppError> {
        let project = self.get_by_id(id).await?;
        ensure_owner(actor, &project, &format!("update project {}", id))?;

        let mut changes = ProjectChanges {
            title: params.title,
            description: params.description,
            thumbnail_image_uri: None,
        };

        let db = self.db;
        match &params.thumbnail {
            Some(file) => {
                self.images
                    .update_thumbnail(
                        THUMBNAIL,
                        file,
                        &project.thumbnail_image_uri,
                        |uri| async move {
                            changes.thumbnail_image_uri = Some(uri);
                            ProjectRepository::new(db)
                                .update(id, changes)
                                .await
                                .map_err(lookup_error)
                        },
                    )
                    .await
            }
            None => ProjectRepository::new(db)
                .update(id, changes)
                .await
                .map_err(lookup_error),
        }
    }

    pub async fn register_like(&self, id: i32, actor: &User) -> Result<(), AppError> {
        self.get_by_id(id).await?;
        let relation = relation(RelationKind::Like, id, actor);

        let repo = ProjectLikeRepository::new(self.db);
        if repo.exists(id, actor.id).await? {
            return Err(relation.conflict());
        }

        repo.create(id, actor.id)
            .await
            .map_err(|e| relation.insert_error(e))?;

        Ok(())
    }

    pub async fn cancel_like(&self, id: i32, actor: &User) -> Result<(), AppError> {
        self.get_by_id(id).await?;

        let repo = ProjectLikeRepository::new(self.db);
        let Some(like) = repo.find(id, actor.id).await? else {
            return Err(relation(RelationKind::Like, id, actor).not_found());
        };

        repo.delete(like).await?;

        Ok(())
    }

    pub async fn register_subscribe(&self, id: i32, actor: &User) -> Result<(), AppError> {
        self.get_by_id(id).await?;
        let relation = relation(RelationKind::Subscribe, id, actor);

        let repo = ProjectSubscribeRepository::new(self.db);
        if repo.exists(id, actor.id).await? {
            return Err(relation.conflict());
        }

        repo.create(id, actor.id)
            .await
            .map_err(|e| relation.insert_error(e))?;

        Ok(())
    }

    pub async fn cancel_subscribe(&self, id: i32, actor: &User) -> Result<(), AppError> {
        self.get_by_id(id).await?;

        let repo = ProjectSubscribeRepository::new(self.db);
        let Some(subscribe) = repo.find(id, actor.id).await? else {
            return Err(relation(RelationKind::Subscribe, id, actor).not_found());
        };

        repo.delete(subscribe).await?;

        Ok(())
    }
}

fn relation(kind: RelationKind, project_id: i32, actor: &User) -> RelationRef {
    RelationRef {
        kind,
        target: "project",
        target_id: project_id,
        user_id: actor.id,
    }
}
