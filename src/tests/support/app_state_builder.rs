use crate::auth::application::use_cases::sign_in::ISignInUseCase;
use crate::education::application::education_use_cases::EducationUseCases;
use crate::education::application::service::EducationService;
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::experience::application::service::ExperienceService;
use crate::intro::application::intro_use_cases::IntroUseCases;
use crate::intro::application::service::IntroService;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::ProjectService;
use crate::tech_stack::application::service::TechStackService;
use crate::tech_stack::application::tech_stack_use_cases::TechStackUseCases;
use crate::tests::support::in_memory::*;
use crate::tests::support::stubs::RejectingSignIn;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Builds an `AppState` for handler tests.
///
/// Anything not overridden is backed by the real service over an empty
/// in-memory repository.
#[derive(Default)]
pub struct TestAppStateBuilder {
    experience: Option<ExperienceUseCases>,
    education: Option<EducationUseCases>,
    tech_stack: Option<TechStackUseCases>,
    project: Option<ProjectUseCases>,
    intro: Option<IntroUseCases>,
    sign_in: Option<Arc<dyn ISignInUseCase + Send + Sync>>,
}

impl TestAppStateBuilder {
    pub fn with_experience(mut self, use_cases: ExperienceUseCases) -> Self {
        self.experience = Some(use_cases);
        self
    }

    pub fn with_education(mut self, use_cases: EducationUseCases) -> Self {
        self.education = Some(use_cases);
        self
    }

    pub fn with_tech_stack(mut self, use_cases: TechStackUseCases) -> Self {
        self.tech_stack = Some(use_cases);
        self
    }

    pub fn with_project(mut self, use_cases: ProjectUseCases) -> Self {
        self.project = Some(use_cases);
        self
    }

    pub fn with_intro(mut self, use_cases: IntroUseCases) -> Self {
        self.intro = Some(use_cases);
        self
    }

    pub fn with_sign_in(mut self, uc: impl ISignInUseCase + Send + Sync + 'static) -> Self {
        self.sign_in = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            experience: self.experience.unwrap_or_else(|| {
                ExperienceUseCases::from_service(ExperienceService::new(
                    InMemoryExperienceRepository::default(),
                ))
            }),
            education: self.education.unwrap_or_else(|| {
                EducationUseCases::from_service(EducationService::new(
                    InMemoryEducationRepository::default(),
                ))
            }),
            tech_stack: self.tech_stack.unwrap_or_else(|| {
                TechStackUseCases::from_service(TechStackService::new(
                    InMemoryTechStackRepository::default(),
                ))
            }),
            project: self.project.unwrap_or_else(|| {
                ProjectUseCases::from_service(ProjectService::new(
                    InMemoryProjectRepository::default(),
                ))
            }),
            intro: self.intro.unwrap_or_else(|| {
                IntroUseCases::from_service(IntroService::new(InMemoryIntroRepository::default()))
            }),
            sign_in_use_case: self.sign_in.unwrap_or_else(|| Arc::new(RejectingSignIn)),
        })
    }
}
