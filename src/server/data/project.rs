use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::project::{NewProject, Project, ProjectChanges};

pub struct ProjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new project and returns it
    pub async fn create(&self, new: NewProject) -> Result<Project, DbErr> {
        let now = Utc::now();
        let project = entity::project::ActiveModel {
            user_id: ActiveValue::Set(new.user_id),
            title: ActiveValue::Set(new.title),
            description: ActiveValue::Set(new.description),
            thumbnail_image_uri: ActiveValue::Set(new.thumbnail_image_uri),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Project::from_entity(project))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Project>, DbErr> {
        let project = entity::prelude::Project::find_by_id(id).one(self.db).await?;

        Ok(project.map(Project::from_entity))
    }

    /// Gets every project ordered by id
    pub async fn get_all(&self) -> Result<Vec<Project>, DbErr> {
        let projects = entity::prelude::Project::find()
            .order_by_asc(entity::project::Column::Id)
            .all(self.db)
            .await?;

        Ok(projects.into_iter().map(Project::from_entity).collect())
    }

    /// Applies the supplied column changes and refreshes `updated_at`
    pub async fn update(&self, id: i32, changes: ProjectChanges) -> Result<Project, DbErr> {
        let project = entity::prelude::Project::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Project with id {} not found",
                id
            )))?;

        let mut active_model: entity::project::ActiveModel = project.into();
        if let Some(title) = changes.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = changes.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(uri) = changes.thumbnail_image_uri {
            active_model.thumbnail_image_uri = ActiveValue::Set(uri);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let project = active_model.update(self.db).await?;

        Ok(Project::from_entity(project))
    }
}
