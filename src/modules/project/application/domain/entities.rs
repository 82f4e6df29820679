use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::action::{ActionError, FormFields, FormValidator};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    #[schema(example = "Portfolio CMS")]
    pub title: String,
    pub description: String,
    #[schema(example = json!(["Rust", "PostgreSQL"]))]
    pub technologies: Vec<String>,
    #[schema(example = "2024-01")]
    pub start_date: String,
    pub end_date: Option<String>,
    #[schema(example = "https://github.com/owner/portfolio")]
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
}

impl ProjectDraft {
    /// `technologies` arrives as one comma separated string.
    pub fn from_form(form: &FormFields) -> Result<Self, ActionError> {
        let mut v = FormValidator::new(form);

        let title = v.required("title", "Title", 255);
        let description = v.required_text("description", "Description");
        let technologies = v.list("technologies", "Technologies");
        let start_date = v.year_month("startDate", "Start date");
        let end_date = v.optional_year_month("endDate", "End date");
        v.date_order("endDate", &start_date, end_date.as_deref());
        let github_url = v.optional_url("githubUrl", "GitHub URL");
        let live_url = v.optional_url("liveUrl", "Live URL");
        let image_url = v.optional_url("imageUrl", "Image URL");

        v.finish()?;

        Ok(Self {
            title,
            description,
            technologies,
            start_date,
            end_date,
            github_url,
            live_url,
            image_url,
        })
    }
}
