pub mod action;
pub mod api;
pub mod persistence;
