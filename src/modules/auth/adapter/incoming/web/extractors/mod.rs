pub mod session;

pub use session::MaybeOwner;
