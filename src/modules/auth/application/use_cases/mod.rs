pub mod bootstrap_owner;
pub mod sign_in;
