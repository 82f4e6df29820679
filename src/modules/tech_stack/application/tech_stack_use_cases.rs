use std::sync::Arc;

use crate::tech_stack::application::ports::incoming::use_cases::{
    CreateTechStackUseCase, DeleteTechStackUseCase, LoadTechStackUseCase, UpdateTechStackUseCase,
};

#[derive(Clone)]
pub struct TechStackUseCases {
    pub load: Arc<dyn LoadTechStackUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTechStackUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTechStackUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTechStackUseCase + Send + Sync>,
}

impl TechStackUseCases {
    pub fn from_service<S>(service: S) -> Self
    where
        S: LoadTechStackUseCase
            + CreateTechStackUseCase
            + UpdateTechStackUseCase
            + DeleteTechStackUseCase
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
