pub mod session;
pub mod sign_in;

pub use session::{session_handler, SessionStatus};
pub use sign_in::{sign_in_handler, SignInRequestDto, SignInResponseBody, SignedInOwnerDto};
