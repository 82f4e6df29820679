use std::sync::Arc;

use crate::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, LoadProjectsUseCase, UpdateProjectUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub load: Arc<dyn LoadProjectsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProjectUseCase + Send + Sync>,
}

impl ProjectUseCases {
    pub fn from_service<S>(service: S) -> Self
    where
        S: LoadProjectsUseCase
            + CreateProjectUseCase
            + UpdateProjectUseCase
            + DeleteProjectUseCase
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
