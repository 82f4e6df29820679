pub mod domain;
pub mod intro_use_cases;
pub mod ports;
pub mod service;
