//! Vec-backed repositories. Clones share storage, so a test can keep one
//! handle and inspect what a service wrote through another.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::education::application::domain::entities::{Education, EducationDraft};
use crate::education::application::ports::outgoing::EducationRepository;
use crate::experience::application::domain::entities::{Experience, ExperienceDraft};
use crate::experience::application::ports::outgoing::ExperienceRepository;
use crate::intro::application::domain::entities::{Intro, IntroDraft};
use crate::intro::application::ports::outgoing::IntroRepository;
use crate::project::application::domain::entities::{Project, ProjectDraft};
use crate::project::application::ports::outgoing::ProjectRepository;
use crate::shared::persistence::RepositoryError;
use crate::tech_stack::application::domain::entities::{TechStack, TechStackDraft};
use crate::tech_stack::application::ports::outgoing::TechStackRepository;

#[derive(Clone)]
pub struct InMemoryTable<T> {
    rows: Arc<Mutex<Vec<T>>>,
}

impl<T> Default for InMemoryTable<T> {
    fn default() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Clone> InMemoryTable<T> {
    pub fn snapshot(&self) -> Vec<T> {
        self.rows.lock().unwrap().clone()
    }

    fn push(&self, row: T) -> T {
        self.rows.lock().unwrap().push(row.clone());
        row
    }

    fn replace_where(
        &self,
        matches: impl Fn(&T) -> bool,
        update: impl FnOnce(&mut T),
    ) -> Result<T, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| matches(row))
            .ok_or(RepositoryError::NotFound)?;
        update(row);
        Ok(row.clone())
    }

    fn remove_where(&self, matches: impl Fn(&T) -> bool) -> u64 {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| !matches(row));
        (before - rows.len()) as u64
    }
}

pub type InMemoryExperienceRepository = InMemoryTable<Experience>;
pub type InMemoryEducationRepository = InMemoryTable<Education>;
pub type InMemoryTechStackRepository = InMemoryTable<TechStack>;
pub type InMemoryProjectRepository = InMemoryTable<Project>;
pub type InMemoryIntroRepository = InMemoryTable<Intro>;

/* --------------------------------------------------
 * Experience
 * -------------------------------------------------- */

#[async_trait]
impl ExperienceRepository for InMemoryTable<Experience> {
    async fn list(&self) -> Result<Vec<Experience>, RepositoryError> {
        Ok(self.snapshot())
    }

    async fn insert(&self, draft: ExperienceDraft) -> Result<Experience, RepositoryError> {
        let now = Utc::now();
        Ok(self.push(Experience {
            id: Uuid::new_v4(),
            company: draft.company,
            title: draft.title,
            description: draft.description,
            start_date: draft.start_date,
            end_date: draft.end_date,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn replace(
        &self,
        id: Uuid,
        draft: ExperienceDraft,
    ) -> Result<Experience, RepositoryError> {
        self.replace_where(
            |row| row.id == id,
            |row| {
                row.company = draft.company;
                row.title = draft.title;
                row.description = draft.description;
                row.start_date = draft.start_date;
                row.end_date = draft.end_date;
                row.updated_at = Utc::now();
            },
        )
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.remove_where(|row| row.id == id) > 0)
    }
}

/* --------------------------------------------------
 * Education
 * -------------------------------------------------- */

#[async_trait]
impl EducationRepository for InMemoryTable<Education> {
    async fn list(&self) -> Result<Vec<Education>, RepositoryError> {
        Ok(self.snapshot())
    }

    async fn insert(&self, draft: EducationDraft) -> Result<Education, RepositoryError> {
        let now = Utc::now();
        Ok(self.push(Education {
            id: Uuid::new_v4(),
            institution: draft.institution,
            degree: draft.degree,
            field_of_study: draft.field_of_study,
            start_date: draft.start_date,
            end_date: draft.end_date,
            description: draft.description,
            grade: draft.grade,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn replace(&self, id: Uuid, draft: EducationDraft) -> Result<Education, RepositoryError> {
        self.replace_where(
            |row| row.id == id,
            |row| {
                row.institution = draft.institution;
                row.degree = draft.degree;
                row.field_of_study = draft.field_of_study;
                row.start_date = draft.start_date;
                row.end_date = draft.end_date;
                row.description = draft.description;
                row.grade = draft.grade;
                row.updated_at = Utc::now();
            },
        )
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.remove_where(|row| row.id == id) > 0)
    }
}

/* --------------------------------------------------
 * Tech stack
 * -------------------------------------------------- */

#[async_trait]
impl TechStackRepository for InMemoryTable<TechStack> {
    async fn list(&self) -> Result<Vec<TechStack>, RepositoryError> {
        Ok(self.snapshot())
    }

    async fn insert(&self, draft: TechStackDraft) -> Result<TechStack, RepositoryError> {
        let now = Utc::now();
        Ok(self.push(TechStack {
            id: Uuid::new_v4(),
            name: draft.name,
            category: draft.category,
            proficiency_level: draft.proficiency_level,
            years_of_experience: draft.years_of_experience,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn replace(&self, id: Uuid, draft: TechStackDraft) -> Result<TechStack, RepositoryError> {
        self.replace_where(
            |row| row.id == id,
            |row| {
                row.name = draft.name;
                row.category = draft.category;
                row.proficiency_level = draft.proficiency_level;
                row.years_of_experience = draft.years_of_experience;
                row.updated_at = Utc::now();
            },
        )
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.remove_where(|row| row.id == id) > 0)
    }
}

/* --------------------------------------------------
 * Project
 * -------------------------------------------------- */

#[async_trait]
impl ProjectRepository for InMemoryTable<Project> {
    async fn list(&self) -> Result<Vec<Project>, RepositoryError> {
        Ok(self.snapshot())
    }

    async fn insert(&self, draft: ProjectDraft) -> Result<Project, RepositoryError> {
        let now = Utc::now();
        Ok(self.push(Project {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            technologies: draft.technologies,
            start_date: draft.start_date,
            end_date: draft.end_date,
            github_url: draft.github_url,
            live_url: draft.live_url,
            image_url: draft.image_url,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn replace(&self, id: Uuid, draft: ProjectDraft) -> Result<Project, RepositoryError> {
        self.replace_where(
            |row| row.id == id,
            |row| {
                row.title = draft.title;
                row.description = draft.description;
                row.technologies = draft.technologies;
                row.start_date = draft.start_date;
                row.end_date = draft.end_date;
                row.github_url = draft.github_url;
                row.live_url = draft.live_url;
                row.image_url = draft.image_url;
                row.updated_at = Utc::now();
            },
        )
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.remove_where(|row| row.id == id) > 0)
    }
}

/* --------------------------------------------------
 * Intro
 * -------------------------------------------------- */

#[async_trait]
impl IntroRepository for InMemoryTable<Intro> {
    async fn find_first(&self) -> Result<Option<Intro>, RepositoryError> {
        Ok(self.snapshot().into_iter().next())
    }

    async fn insert(&self, draft: IntroDraft) -> Result<Intro, RepositoryError> {
        let now = Utc::now();
        Ok(self.push(Intro {
            id: Uuid::new_v4(),
            name: draft.name,
            title: draft.title,
            summary: draft.summary,
            profile_image_url: draft.profile_image_url,
            contact_email: draft.contact_email,
            linkedin_url: draft.linkedin_url,
            github_url: draft.github_url,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn replace(&self, id: Uuid, draft: IntroDraft) -> Result<Intro, RepositoryError> {
        self.replace_where(
            |row| row.id == id,
            |row| {
                row.name = draft.name;
                row.title = draft.title;
                row.summary = draft.summary;
                row.profile_image_url = draft.profile_image_url;
                row.contact_email = draft.contact_email;
                row.linkedin_url = draft.linkedin_url;
                row.github_url = draft.github_url;
                row.updated_at = Utc::now();
            },
        )
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        Ok(self.remove_where(|_| true))
    }
}
