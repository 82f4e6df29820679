use sea_orm::entity::prelude::*;

use crate::experience::application::domain::entities::Experience;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "job_experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub company: String,
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    /// YYYY-MM
    pub start_date: String,
    pub end_date: String,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Experience {
    fn from(model: Model) -> Self {
        Experience {
            id: model.id,
            company: model.company,
            title: model.title,
            description: model.description,
            start_date: model.start_date,
            end_date: model.end_date,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
