pub mod form;
pub mod result;
pub mod validation;

pub use form::FormFields;
pub use result::{
    ActionError, ActionOutcome, ActionResult, FieldErrors, IntroActionResult, FORM_ERROR_KEY,
};
pub use validation::{parse_record_id, FormValidator};
