use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::action::{ActionError, FormFields, FormValidator};

/// A job held by the owner, shown on the experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    #[schema(example = "Acme")]
    pub company: String,
    #[schema(example = "Engineer")]
    pub title: String,
    #[schema(example = "Built things")]
    pub description: String,
    #[schema(example = "2020-01")]
    pub start_date: String,
    #[schema(example = "2022-06")]
    pub end_date: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated experience fields, ready to insert or to replace a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceDraft {
    pub company: String,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

impl ExperienceDraft {
    pub fn from_form(form: &FormFields) -> Result<Self, ActionError> {
        let mut v = FormValidator::new(form);

        let company = v.required("company", "Company", 255);
        let title = v.required("title", "Title", 255);
        let description = v.required_text("description", "Description");
        let start_date = v.year_month("startDate", "Start date");
        let end_date = v.year_month("endDate", "End date");
        v.date_order("endDate", &start_date, Some(&end_date));

        v.finish()?;

        Ok(Self {
            company,
            title,
            description,
            start_date,
            end_date,
        })
    }
}
