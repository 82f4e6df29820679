use sea_orm::entity::prelude::*;

use crate::education::application::domain::entities::Education;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "education")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub institution: String,
    pub degree: String,
    pub field_of_study: String,

    pub start_date: String,
    #[sea_orm(nullable)]
    pub end_date: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(nullable)]
    pub grade: Option<String>,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Education {
    fn from(model: Model) -> Self {
        Education {
            id: model.id,
            institution: model.institution,
            degree: model.degree,
            field_of_study: model.field_of_study,
            start_date: model.start_date,
            end_date: model.end_date,
            description: model.description,
            grade: model.grade,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
