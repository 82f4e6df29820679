pub mod create_education;
pub mod delete_education;
pub mod get_education;
pub mod update_education;

pub use create_education::create_education_handler;
pub use delete_education::delete_education_handler;
pub use get_education::get_education_handler;
pub use update_education::update_education_handler;
