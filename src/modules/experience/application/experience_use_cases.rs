use std::sync::Arc;

use crate::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, LoadExperiencesUseCase,
    UpdateExperienceUseCase,
};

#[derive(Clone)]
pub struct ExperienceUseCases {
    pub load: Arc<dyn LoadExperiencesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateExperienceUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateExperienceUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteExperienceUseCase + Send + Sync>,
}

impl ExperienceUseCases {
    /// Wires every slot to the same service instance.
    pub fn from_service<S>(service: S) -> Self
    where
        S: LoadExperiencesUseCase
            + CreateExperienceUseCase
            + UpdateExperienceUseCase
            + DeleteExperienceUseCase
            + 'static,
    {
        let service = Arc::new(service);
        Self {
            load: service.clone(),
            create: service.clone(),
            update: service.clone(),
            delete: service,
        }
    }
}
