use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub thumbnail_image_uri: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::project_like::Entity")]
    ProjectLike,
    #[sea_orm(has_many = "super::project_subscribe::Entity")]
    ProjectSubscribe,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::project_like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectLike.def()
    }
}

impl Related<super::project_subscribe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectSubscribe.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
