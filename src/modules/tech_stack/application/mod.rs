pub mod domain;
pub mod ports;
pub mod service;
pub mod tech_stack_use_cases;
