use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::action::{ActionError, FormFields, FormValidator};

/// Form field that turns a save into a delete when it equals [`DELETE_ACTION`].
pub const ACTION_FIELD: &str = "action";
pub const DELETE_ACTION: &str = "delete";

/// The profile header. At most one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Intro {
    pub id: Uuid,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "Backend Engineer")]
    pub title: String,
    pub summary: String,
    pub profile_image_url: Option<String>,
    #[schema(example = "jane@example.com")]
    pub contact_email: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroDraft {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub profile_image_url: Option<String>,
    pub contact_email: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
}

impl IntroDraft {
    pub fn from_form(form: &FormFields) -> Result<Self, ActionError> {
        let mut v = FormValidator::new(form);

        let name = v.required("name", "Name", 255);
        let title = v.required("title", "Title", 255);
        let summary = v.required_text("summary", "Summary");
        let profile_image_url = v.optional_url("profileImageUrl", "Profile image URL");
        let contact_email = v.optional_email("contactEmail", "Contact email");
        let linkedin_url = v.optional_url("linkedinUrl", "LinkedIn URL");
        let github_url = v.optional_url("githubUrl", "GitHub URL");

        v.finish()?;

        Ok(Self {
            name,
            title,
            summary,
            profile_image_url,
            contact_email,
            linkedin_url,
            github_url,
        })
    }
}

/// True when the submitted form asks for the intro to be removed.
pub fn is_delete_request(form: &FormFields) -> bool {
    form.text(ACTION_FIELD) == Some(DELETE_ACTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> FormFields {
        FormFields::from([
            ("name", "Jane Doe"),
            ("title", "Backend Engineer"),
            ("summary", "I build APIs."),
        ])
    }

    #[test]
    fn minimal_intro_is_valid() {
        let draft = IntroDraft::from_form(&jane()).unwrap();

        assert_eq!(draft.name, "Jane Doe");
        assert_eq!(draft.contact_email, None);
    }

    #[test]
    fn contact_email_is_validated() {
        let errors = IntroDraft::from_form(&jane().with("contactEmail", "jane-at-example"))
            .unwrap_err()
            .into_field_errors();

        assert_eq!(
            errors.get("contactEmail"),
            Some(&["Contact email must be a valid email address".to_string()][..])
        );
    }

    #[test]
    fn profile_links_must_be_urls() {
        let errors = IntroDraft::from_form(
            &jane()
                .with("linkedinUrl", "linkedin")
                .with("githubUrl", "https://github.com/jane"),
        )
        .unwrap_err()
        .into_field_errors();

        assert!(errors.contains("linkedinUrl"));
        assert!(!errors.contains("githubUrl"));
    }

    #[test]
    fn delete_sentinel_is_detected() {
        assert!(is_delete_request(&FormFields::from([("action", "delete")])));
        assert!(is_delete_request(&FormFields::from([("action", " delete ")])));
        assert!(!is_delete_request(&FormFields::from([("action", "save")])));
        assert!(!is_delete_request(&jane()));
    }
}
