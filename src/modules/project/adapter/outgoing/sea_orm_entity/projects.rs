use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    /// JSON array of strings.
    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: Json,

    pub start_date: String,
    #[sea_orm(nullable)]
    pub end_date: Option<String>,

    #[sea_orm(nullable)]
    pub github_url: Option<String>,
    #[sea_orm(nullable)]
    pub live_url: Option<String>,
    #[sea_orm(nullable)]
    pub image_url: Option<String>,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
