use std::sync::Arc;

use crate::intro::application::ports::incoming::use_cases::{
    DeleteIntroUseCase, LoadIntroUseCase, SaveIntroUseCase,
};

#[derive(Clone)]
pub struct IntroUseCases {
    pub load: Arc<dyn LoadIntroUseCase + Send + Sync>,
    pub save: Arc<dyn SaveIntroUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteIntroUseCase + Send + Sync>,
}

impl IntroUseCases {
    pub fn from_service<S>(service: S) -> Self
    where
        S: LoadIntroUseCase + SaveIntroUseCase + DeleteIntroUseCase + 'static,
    {
        let service = Arc::new(service);
        Self {
            load: service.clone(),
            save: service.clone(),
            delete: service,
        }
    }
}
