use sea_orm::entity::prelude::*;

use crate::intro::application::domain::entities::Intro;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "intro")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub summary: String,

    #[sea_orm(nullable)]
    pub profile_image_url: Option<String>,
    #[sea_orm(nullable)]
    pub contact_email: Option<String>,
    #[sea_orm(nullable)]
    pub linkedin_url: Option<String>,
    #[sea_orm(nullable)]
    pub github_url: Option<String>,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Intro {
    fn from(model: Model) -> Self {
        Intro {
            id: model.id,
            name: model.name,
            title: model.title,
            summary: model.summary,
            profile_image_url: model.profile_image_url,
            contact_email: model.contact_email,
            linkedin_url: model.linkedin_url,
            github_url: model.github_url,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
