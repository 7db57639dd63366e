// Questionnaire intake: raw form payload, typed answers, and boundary validation.
// Nothing downstream of `validate_submission` sees an unvalidated payload.

pub mod handlers;
pub mod models;
pub mod validation;
