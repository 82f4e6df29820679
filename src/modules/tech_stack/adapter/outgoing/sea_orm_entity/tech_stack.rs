use sea_orm::entity::prelude::*;

use crate::tech_stack::application::domain::entities::TechStack;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tech_stack")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,
    pub category: String,

    /// CHECK 1..=10 in the schema as well.
    pub proficiency_level: i32,

    #[sea_orm(nullable)]
    pub years_of_experience: Option<i32>,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for TechStack {
    fn from(model: Model) -> Self {
        TechStack {
            id: model.id,
            name: model.name,
            category: model.category,
            proficiency_level: model.proficiency_level,
            years_of_experience: model.years_of_experience,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
