use std::sync::Arc;

use crate::education::application::ports::incoming::use_cases::{
    CreateEducationUseCase, DeleteEducationUseCase, LoadEducationUseCase, UpdateEducationUseCase,
};

#[derive(Clone)]
pub struct EducationUseCases {
    pub load: Arc<dyn LoadEducationUseCase + Send + Sync>,
    pub create: Arc<dyn CreateEducationUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateEducationUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteEducationUseCase + Send + Sync>,
}

impl EducationUseCases {
    pub fn from_service<S>(service: S) -> Self
    where
        S: LoadEducationUseCase
            + CreateEducationUseCase
            + UpdateEducationUseCase
            + DeleteEducationUseCase
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
