//! HTML rendering of the interest form
//!
//! [`render_form`] produces a static snapshot of a component: the current
//! values, the errors of the last submission and the PIN visibility. The
//! browser view mounts the same markup and then keeps it in sync.

use crate::component::InterestFormComponent;
use spidr_conf::Settings;
use spidr_forms::{FormField, InputMask, Widget};

/// Class of the wrapper around one field
pub const FIELD_CLASS: &str = "spidr-field";
/// Class of every input
pub const INPUT_CLASS: &str = "spidr-input";
/// Extra class of an input whose field has an error
pub const INPUT_ERROR_CLASS: &str = "spidr-input-error";
/// Class of an error paragraph
pub const ERROR_CLASS: &str = "spidr-error";
/// Class of the PIN visibility button
pub const TOGGLE_CLASS: &str = "spidr-pin-toggle";

/// Id of the error paragraph describing `name`
///
/// # Examples
///
/// ```
/// assert_eq!(spidr_pages::rendering::error_id("phone"), "phone-error");
/// ```
pub fn error_id(name: &str) -> String {
	format!("{name}-error")
}

/// Button text and accessible label for the PIN toggle
pub fn toggle_labels(pin_visible: bool) -> (&'static str, &'static str) {
	if pin_visible {
		("Hide", "Hide PIN")
	} else {
		("Show", "Show PIN")
	}
}

/// HTML-escape a string
///
/// # Examples
///
/// ```
/// use spidr_pages::rendering::html_escape;
///
/// assert_eq!(html_escape("<b>\"Kai\" & 'co'</b>"), "&lt;b&gt;&quot;Kai&quot; &amp; &#x27;co&#x27;&lt;/b&gt;");
/// ```
pub fn html_escape(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

/// Render the whole page for `component`
///
/// # Examples
///
/// ```
/// use spidr_conf::Settings;
/// use spidr_pages::{InterestFormComponent, MemorySink, render_form};
///
/// let component = InterestFormComponent::new(MemorySink::new());
/// let html = render_form(&component, &Settings::default());
///
/// assert!(html.contains("<h1 class=\"spidr-title\">Spidr Air Fryer Interest Form</h1>"));
/// assert!(html.contains("aria-label=\"Show PIN\""));
/// ```
pub fn render_form(component: &InterestFormComponent, settings: &Settings) -> String {
	let mut html = String::new();

	html.push_str("<main class=\"spidr-page\">\n");
	html.push_str("<section class=\"spidr-card\">\n");
	html.push_str(&format!(
		"<h1 class=\"spidr-title\">{}</h1>\n",
		html_escape(&settings.title)
	));
	html.push_str("<hr class=\"spidr-separator\" />\n");
	html.push_str("<form class=\"spidr-form\" novalidate>\n");

	for field in component.form().fields() {
		html.push_str(&render_field(component, field.as_ref()));
	}

	html.push_str(&format!(
		"<button type=\"submit\" class=\"spidr-submit\">{}</button>\n",
		html_escape(&settings.submit_label)
	));
	html.push_str("</form>\n</section>\n</main>\n");
	html
}

/// Input `type` attribute for `field` given the PIN visibility
pub fn input_type(field: &dyn FormField, pin_visible: bool) -> &'static str {
	match field.widget() {
		Widget::PasswordInput if pin_visible => "text",
		widget => widget.input_type(),
	}
}

fn render_field(component: &InterestFormComponent, field: &dyn FormField) -> String {
	let name = html_escape(field.name());
	let value = component.value(field.name()).unwrap_or_default();
	let error = component.error(field.name());
	let pin_visible = component.pin_visible();

	let mut html = format!("<div class=\"{FIELD_CLASS}\">\n");

	if let Some(label) = field.label() {
		html.push_str(&format!(
			"<label for=\"{name}\">{}</label>\n",
			html_escape(label)
		));
	}

	let mut class = INPUT_CLASS.to_string();
	if error.is_some() {
		class.push(' ');
		class.push_str(INPUT_ERROR_CLASS);
	}

	let mut input = format!(
		"<input id=\"{name}\" name=\"{name}\" type=\"{}\" value=\"{}\"",
		input_type(field, pin_visible),
		html_escape(&value)
	);
	if let Some(placeholder) = field.placeholder() {
		input.push_str(&format!(" placeholder=\"{}\"", html_escape(placeholder)));
	}
	if field.mask() == InputMask::Pin {
		input.push_str(" inputmode=\"numeric\"");
	}
	input.push_str(&format!(
		" aria-describedby=\"{}\" class=\"{class}\" />\n",
		error_id(&name)
	));

	if *field.widget() == Widget::PasswordInput {
		let (text, aria) = toggle_labels(pin_visible);
		html.push_str("<div class=\"spidr-pin\">\n");
		html.push_str(&input);
		html.push_str(&format!(
			"<button type=\"button\" class=\"{TOGGLE_CLASS}\" aria-controls=\"{name}\" aria-label=\"{aria}\">{text}</button>\n"
		));
		html.push_str("</div>\n");
	} else {
		html.push_str(&input);
	}

	if let Some(help_text) = field.help_text() {
		html.push_str(&format!(
			"<span class=\"spidr-help\">{}</span>\n",
			html_escape(help_text)
		));
	}

	if let Some(message) = error {
		html.push_str(&format!(
			"<p id=\"{}\" class=\"{ERROR_CLASS}\">{}</p>\n",
			error_id(&name),
			html_escape(&message)
		));
	}

	html.push_str("</div>\n");
	html
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sink::MemorySink;
	use rstest::rstest;

	fn component() -> InterestFormComponent {
		InterestFormComponent::new(MemorySink::new())
	}

	#[rstest]
	fn test_toggle_labels() {
		assert_eq!(toggle_labels(false), ("Show", "Show PIN"));
		assert_eq!(toggle_labels(true), ("Hide", "Hide PIN"));
	}

	#[rstest]
	fn test_render_lists_every_field_with_placeholder() {
		// Arrange
		let component = component();

		// Act
		let html = render_form(&component, &Settings::default());

		// Assert
		for (name, placeholder) in [
			("firstName", "Ex. Kai"),
			("lastName", "Ex. Depweg"),
			("phone", "Ex. 123-456-7890"),
			("email", "Ex. kai@example.com"),
			("costGuess", "Ex. 69"),
			("spidrPin", "1234-5678-9012-3456"),
		] {
			assert!(html.contains(&format!("<label for=\"{name}\">")), "{name}");
			assert!(html.contains(&format!("placeholder=\"{placeholder}\"")), "{name}");
			assert!(html.contains(&format!("aria-describedby=\"{name}-error\"")), "{name}");
		}
		assert!(html.contains("Guess the Air Fryer\u{2019}s Cost ($)"));
		assert!(html.contains("<form class=\"spidr-form\" novalidate>"));
		assert!(!html.contains(ERROR_CLASS));
	}

	#[rstest]
	fn test_render_input_types() {
		let html = render_form(&component(), &Settings::default());

		assert!(html.contains("name=\"email\" type=\"email\""));
		assert!(html.contains("name=\"costGuess\" type=\"number\""));
		assert!(html.contains("name=\"phone\" type=\"text\""));
		assert!(html.contains("name=\"spidrPin\" type=\"password\""));
		assert!(html.contains("inputmode=\"numeric\""));
	}

	#[rstest]
	fn test_render_visible_pin() {
		// Arrange
		let component = component();
		component.toggle_pin_visibility();

		// Act
		let html = render_form(&component, &Settings::default());

		// Assert
		assert!(html.contains("name=\"spidrPin\" type=\"text\""));
		assert!(html.contains("aria-label=\"Hide PIN\">Hide</button>"));
	}

	#[rstest]
	fn test_render_errors_after_empty_submit() {
		// Arrange
		let component = component();
		component.handle_submit().unwrap();

		// Act
		let html = render_form(&component, &Settings::default());

		// Assert
		assert!(html.contains(
			"<p id=\"firstName-error\" class=\"spidr-error\">First name is required</p>"
		));
		assert!(html.contains("Phone number must be XXX-XXX-XXXX"));
		assert!(html.contains("class=\"spidr-input spidr-input-error\""));
	}

	#[rstest]
	fn test_render_escapes_values_and_settings() {
		// Arrange
		let component = component();
		component.handle_change("firstName", "<Kai>").unwrap();
		let mut settings = Settings::default();
		settings.title = "Fry & Co".to_string();

		// Act
		let html = render_form(&component, &settings);

		// Assert
		assert!(html.contains("value=\"&lt;Kai&gt;\""));
		assert!(html.contains(">Fry &amp; Co</h1>"));
	}
}
