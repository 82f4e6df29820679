use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::action::{ActionError, FormFields, FormValidator};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: Uuid,
    #[schema(example = "MIT")]
    pub institution: String,
    #[schema(example = "BSc")]
    pub degree: String,
    #[schema(example = "Computer Science")]
    pub field_of_study: String,
    #[schema(example = "2014-09")]
    pub start_date: String,
    /// Absent while still enrolled.
    #[schema(example = "2018-06")]
    pub end_date: Option<String>,
    pub description: Option<String>,
    #[schema(example = "3.8 GPA")]
    pub grade: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationDraft {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub grade: Option<String>,
}

impl EducationDraft {
    pub fn from_form(form: &FormFields) -> Result<Self, ActionError> {
        let mut v = FormValidator::new(form);

        let institution = v.required("institution", "Institution", 255);
        let degree = v.required("degree", "Degree", 255);
        let field_of_study = v.required("fieldOfStudy", "Field of study", 255);
        let start_date = v.year_month("startDate", "Start date");
        let end_date = v.optional_year_month("endDate", "End date");
        v.date_order("endDate", &start_date, end_date.as_deref());
        let description = v.optional_text("description", "Description");
        let grade = v.optional("grade", "Grade", 50);

        v.finish()?;

        Ok(Self {
            institution,
            degree,
            field_of_study,
            start_date,
            end_date,
            description,
            grade,
        })
    }
}
