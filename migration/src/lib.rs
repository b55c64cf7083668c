pub use sea_orm_migration::prelude::*;

mod m20251210_000001_create_user_table;
mod m20251210_000002_create_project_table;
mod m20251210_000003_create_project_like_table;
mod m20251210_000004_create_project_subscribe_table;
mod m20251211_000005_create_article_table;
mod m20251211_000006_create_article_hashtag_table;
mod m20251211_000007_create_article_like_table;
mod m20251211_000008_create_article_subscribe_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251210_000001_create_user_table::Migration),
            Box::new(m20251210_000002_create_project_table::Migration),
            Box::new(m20251210_000003_create_project_like_table::Migration),
            Box::new(m20251210_000004_create_project_subscribe_table::Migration),
            Box::new(m20251211_000005_create_article_table::Migration),
            Box::new(m20251211_000006_create_article_hashtag_table::Migration),
            Box::new(m20251211_000007_create_article_like_table::Migration),
            Box::new(m20251211_000008_create_article_subscribe_table::Migration),
        ]
    }
}
