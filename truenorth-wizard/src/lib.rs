//! # truenorth-wizard
//!
//! Interactive session layer over the `truenorth` engine: a cursor through
//! the branching questionnaire, per-question-kind input validation, and the
//! language-test expiry side effect. Rendering stays out of scope; a UI
//! drives a [`Session`] and draws whatever `current()` returns.

mod dates;
mod session;
mod validate;

pub use dates::{TestDateStatus, VALIDITY_MONTHS, test_date_status};
pub use session::{Progress, Session, SessionError};
pub use validate::validate;
