//! # Spidr
//!
//! The Spidr air fryer interest form: six fields, two input masks, a
//! validation schema and a sink for accepted submissions.
//!
//! ## Feature Flags
//!
//! - `minimal` - Form definition, masks and validation only
//! - `full` (default) - Adds settings and the interactive view
//! - `conf` - Layered settings (defaults, TOML file, `SPIDR_` environment)
//! - `pages` - Reactive component, HTML rendering and submission sinks
//!
//! ## Quick Example
//!
//! ```rust
//! use spidr::prelude::*;
//!
//! let sink = MemorySink::new();
//! let form = InterestFormComponent::new(sink.clone());
//!
//! form.handle_change("phone", "1234567").unwrap();
//! assert_eq!(form.value("phone").unwrap(), "123-456-7");
//!
//! let outcome = form.handle_submit().unwrap();
//! assert!(!outcome.is_submitted());
//! assert_eq!(form.error("phone").as_deref(), Some("Phone number must be XXX-XXX-XXXX"));
//! assert!(sink.is_empty());
//! ```

/// Form definition, masks and validation
pub mod forms {
	pub use spidr_forms::*;
}

/// Layered settings
#[cfg(feature = "conf")]
pub mod conf {
	pub use spidr_conf::*;
}

/// Interactive view of the form
#[cfg(feature = "pages")]
pub mod pages {
	pub use spidr_pages::*;
}

pub use spidr_forms::interest::interest_form;
pub use spidr_forms::{
	ErrorMap, Form, FormError, FormResult, FormState, InputMask, InterestSubmission,
};

#[cfg(feature = "conf")]
pub use spidr_conf::{Settings, SettingsError};

#[cfg(feature = "pages")]
pub use spidr_pages::{
	InterestFormComponent, MemorySink, SubmissionSink, SubmitOutcome, TracingSink, render_form,
};

pub mod prelude {
	// Forms - always available
	pub use crate::{
		ErrorMap, Form, FormError, FormResult, FormState, InputMask, InterestSubmission,
		interest_form,
	};
	pub use spidr_forms::FormField;

	// Settings feature
	#[cfg(feature = "conf")]
	pub use crate::Settings;

	// Pages feature
	#[cfg(feature = "pages")]
	pub use crate::{
		InterestFormComponent, MemorySink, SubmissionSink, SubmitOutcome, TracingSink,
		render_form,
	};
}
