//! Interactive view of the Spidr interest form
//!
//! This crate drives a [`spidr_forms`] form from user events:
//!
//! - [`InterestFormComponent`]: values, errors and PIN visibility held in
//!   [`Signal`]s, with change, submit and toggle handlers
//! - [`SubmissionSink`]: where validated submissions go
//! - [`render_form`]: HTML snapshot of a component
//! - `dom::mount` (WASM only): the same view wired to browser events
//!
//! ## Example
//!
//! ```
//! use spidr_pages::{InterestFormComponent, MemorySink, SubmitOutcome};
//!
//! let sink = MemorySink::new();
//! let form = InterestFormComponent::new(sink.clone());
//!
//! for (name, raw) in [
//!     ("firstName", "Kai"),
//!     ("lastName", "D"),
//!     ("phone", "1234567890"),
//!     ("email", "a@b.com"),
//!     ("costGuess", "69"),
//!     ("spidrPin", "1234567890123456"),
//! ] {
//!     form.handle_change(name, raw).unwrap();
//! }
//!
//! let outcome = form.handle_submit().unwrap();
//! assert!(matches!(outcome, SubmitOutcome::Submitted(ref s) if s.cost_guess == 69.0));
//! assert_eq!(sink.len(), 1);
//! ```

pub mod component;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod reactive;
pub mod rendering;
pub mod sink;

pub use component::{InterestFormComponent, SubmitOutcome};
pub use reactive::Signal;
pub use rendering::{html_escape, render_form};
#[cfg(target_arch = "wasm32")]
pub use sink::ConsoleSink;
pub use sink::{MemorySink, SubmissionSink, TracingSink};
