use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::action::{ActionError, FormFields, FormValidator};

pub const MIN_PROFICIENCY: i32 = 1;
pub const MAX_PROFICIENCY: i32 = 10;
pub const MAX_YEARS_OF_EXPERIENCE: i32 = 80;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechStack {
    pub id: Uuid,
    #[schema(example = "Rust")]
    pub name: String,
    #[schema(example = "Languages")]
    pub category: String,
    /// 1 to 10.
    #[schema(example = 8, minimum = 1, maximum = 10)]
    pub proficiency_level: i32,
    #[schema(example = 3)]
    pub years_of_experience: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Tech stack entries sharing a category, in the order they were listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TechStackGroup {
    #[schema(example = "Languages")]
    pub category: String,
    pub items: Vec<TechStack>,
}

/// Groups by category. Categories keep first-seen order, items keep input order.
pub fn group_by_category(items: Vec<TechStack>) -> Vec<TechStackGroup> {
    let mut groups: Vec<TechStackGroup> = Vec::new();

    for item in items {
        match groups.iter_mut().find(|g| g.category == item.category) {
            Some(group) => group.items.push(item),
            None => groups.push(TechStackGroup {
                category: item.category.clone(),
                items: vec![item],
            }),
        }
    }

    groups
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechStackDraft {
    pub name: String,
    pub category: String,
    pub proficiency_level: i32,
    pub years_of_experience: Option<i32>,
}

impl TechStackDraft {
    pub fn from_form(form: &FormFields) -> Result<Self, ActionError> {
        let mut v = FormValidator::new(form);

        let name = v.required("name", "Name", 100);
        let category = v.required("category", "Category", 100);
        let proficiency_level = v.int_in_range(
            "proficiencyLevel",
            "Proficiency level",
            MIN_PROFICIENCY,
            MAX_PROFICIENCY,
        );
        let years_of_experience = v.optional_int_in_range(
            "yearsOfExperience",
            "Years of experience",
            0,
            MAX_YEARS_OF_EXPERIENCE,
        );

        v.finish()?;

        Ok(Self {
            name,
            category,
            proficiency_level,
            years_of_experience,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rust() -> FormFields {
        FormFields::from([
            ("name", "Rust"),
            ("category", "Languages"),
            ("proficiencyLevel", "8"),
        ])
    }

    fn errors_for(form: &FormFields, field: &str) -> Vec<String> {
        match TechStackDraft::from_form(form) {
            Err(ActionError::Validation(errors)) => errors.get(field).unwrap_or_default().to_vec(),
            Ok(_) => Vec::new(),
            Err(other) => panic!("unexpected error {other:?}"),
        }
    }

    fn item(name: &str, category: &str) -> TechStack {
        TechStack {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
            proficiency_level: 5,
            years_of_experience: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn proficiency_bounds_are_inclusive() {
        for ok in ["1", "10"] {
            assert!(TechStackDraft::from_form(&rust().with("proficiencyLevel", ok)).is_ok());
        }
        for bad in ["0", "11", "-3", "seven", "7.5", ""] {
            assert!(
                !errors_for(&rust().with("proficiencyLevel", bad), "proficiencyLevel").is_empty(),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn proficiency_out_of_range_message() {
        let form = FormFields::from([
            ("name", "Go"),
            ("category", "Languages"),
            ("proficiencyLevel", "11"),
        ]);

        assert_eq!(
            errors_for(&form, "proficiencyLevel"),
            vec!["Proficiency level must be between 1 and 10".to_string()]
        );
    }

    #[test]
    fn years_of_experience_is_optional_but_checked() {
        assert_eq!(
            TechStackDraft::from_form(&rust()).unwrap().years_of_experience,
            None
        );
        assert_eq!(
            TechStackDraft::from_form(&rust().with("yearsOfExperience", "3"))
                .unwrap()
                .years_of_experience,
            Some(3)
        );
        assert!(!errors_for(&rust().with("yearsOfExperience", "-1"), "yearsOfExperience").is_empty());
    }

    #[test]
    fn name_and_category_are_capped_at_one_hundred() {
        let form = rust().with("category", &"x".repeat(101));

        assert!(!errors_for(&form, "category").is_empty());
    }

    #[test]
    fn grouping_keeps_first_seen_category_order() {
        let groups = group_by_category(vec![
            item("Rust", "Languages"),
            item("Postgres", "Databases"),
            item("Go", "Languages"),
        ]);

        let categories: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, ["Languages", "Databases"]);

        let languages: Vec<&str> = groups[0].items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(languages, ["Rust", "Go"]);
    }

    #[test]
    fn grouping_empty_list() {
        assert!(group_by_category(Vec::new()).is_empty());
    }
}
