pub mod create_tech_stack;
pub mod delete_tech_stack;
pub mod get_tech_stack;
pub mod get_tech_stack_grouped;
pub mod update_tech_stack;

pub use create_tech_stack::create_tech_stack_handler;
pub use delete_tech_stack::delete_tech_stack_handler;
pub use get_tech_stack::get_tech_stack_handler;
pub use get_tech_stack_grouped::get_tech_stack_grouped_handler;
pub use update_tech_stack::update_tech_stack_handler;
