//! Form processing and validation for the Spidr interest form
//!
//! This crate provides the pieces a form view is assembled from:
//! - Field types with per-field clean rules and error messages
//! - Input masks that reformat keystrokes into display form (phone, PIN)
//! - A declarative [`Form`] schema that validates a [`FormState`] into
//!   cleaned data or an [`ErrorMap`]
//! - The interest form itself and its typed [`InterestSubmission`]
//!
//! ## Example
//!
//! ```
//! use spidr_forms::interest::{self, InterestSubmission};
//!
//! let form = interest::interest_form();
//! let mut state = form.initial_state();
//!
//! for (name, raw) in [
//!     ("firstName", "Kai"),
//!     ("lastName", "D"),
//!     ("phone", "1234567890"),
//!     ("email", "a@b.com"),
//!     ("costGuess", "69"),
//!     ("spidrPin", "1234567890123456"),
//! ] {
//!     let formatted = form.format_input(name, raw).unwrap();
//!     state.set(name, formatted).unwrap();
//! }
//!
//! let cleaned = form.validate(&state).unwrap();
//! let submission = InterestSubmission::from_cleaned(cleaned).unwrap();
//! assert_eq!(submission.phone, "123-456-7890");
//! assert_eq!(submission.cost_guess, 69.0);
//! ```

pub mod field;
pub mod fields;
pub mod form;
pub mod interest;
pub mod mask;
pub mod state;
pub mod validators;

pub use field::{FieldError, FieldResult, FormField, Widget};
pub use fields::{CharField, EmailField, FloatField, RegexField};
pub use form::{CleanedData, Form, FormError, FormResult};
pub use interest::InterestSubmission;
pub use mask::InputMask;
pub use state::{ErrorMap, FormState};
pub use validators::{EmailValidator, PatternValidator};
