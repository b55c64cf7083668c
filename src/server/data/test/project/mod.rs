use crate::server::{
    data::project::ProjectRepository,
    model::project::{NewProject, ProjectChanges},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests creating and reading back a project.
///
/// Expected: Ok with every field stored
#[tokio::test]
async fn creates_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ProjectRepository::new(db);
    let project = repo
        .create(NewProject {
            user_id: user.id,
            title: "Spadework".to_string(),
            description: "A side project".to_string(),
            thumbnail_image_uri: "/images/project/thumbnail/abc.png".to_string(),
        })
        .await?;

    let stored = repo.find_by_id(project.id).await?.unwrap();

    assert_eq!(stored, project);
    assert_eq!(stored.user_id, user.id);
    assert_eq!(stored.thumbnail_image_uri, "/images/project/thumbnail/abc.png");

    Ok(())
}

/// Tests that only the supplied description changes.
///
/// Expected: Ok with title and thumbnail preserved
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, project) = factory::helpers::create_project_with_owner(db).await?;

    let repo = ProjectRepository::new(db);
    let updated = repo
        .update(
            project.id,
            ProjectChanges {
                description: Some("Rewritten".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, project.title);
    assert_eq!(updated.description, "Rewritten");
    assert_eq!(updated.thumbnail_image_uri, project.thumbnail_image_uri);

    Ok(())
}

/// Tests listing projects in id order.
///
/// Expected: Ok with both projects
#[tokio::test]
async fn returns_all_projects() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_a, first) = factory::helpers::create_project_with_owner(db).await?;
    let (_b, second) = factory::helpers::create_project_with_owner(db).await?;

    let repo = ProjectRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.into_iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
