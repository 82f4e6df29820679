pub mod auth;
pub mod education;
pub mod experience;
pub mod intro;
pub mod project;
pub mod tech_stack;
