pub mod delete_intro;
pub mod get_intro;
pub mod save_intro;

pub use delete_intro::delete_intro_handler;
pub use get_intro::get_intro_handler;
pub use save_intro::save_intro_handler;
