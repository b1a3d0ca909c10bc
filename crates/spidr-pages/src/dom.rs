//! Browser mounting (WASM only)
//!
//! [`mount`] writes the markup of [`render_form`] into a parent element and
//! wires its inputs to an [`InterestFormComponent`]. Error paragraphs, the
//! error class of each input and the PIN input type follow the component's
//! signals afterwards.

use crate::component::InterestFormComponent;
use crate::rendering::{
	ERROR_CLASS, FIELD_CLASS, INPUT_ERROR_CLASS, TOGGLE_CLASS, error_id, input_type, render_form,
	toggle_labels,
};
use crate::sink::ConsoleSink;
use spidr_conf::Settings;
use spidr_forms::{ErrorMap, FormField};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlInputElement};

/// Mount the form into `parent` and return the `<form>` element
pub fn mount(
	parent: &Element,
	component: &InterestFormComponent,
	settings: &Settings,
) -> Result<Element, JsValue> {
	let document = parent
		.owner_document()
		.ok_or_else(|| JsValue::from_str("parent element is not attached to a document"))?;

	parent.set_inner_html(&render_form(component, settings));
	let form = parent
		.query_selector("form")?
		.ok_or_else(|| JsValue::from_str("rendered markup has no form"))?;

	for field in component.form().fields() {
		bind_input(&document, component, field.as_ref())?;
		bind_errors(&document, component, field.name())?;
	}
	bind_toggle(&document, component)?;
	bind_submit(&form, component)?;

	Ok(form)
}

/// Mount the interest form into the element with id `parent_id`, logging
/// submissions to the browser console
#[wasm_bindgen(js_name = mountInterestForm)]
pub fn mount_interest_form(parent_id: &str) -> Result<(), JsValue> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| JsValue::from_str("no document available"))?;
	let parent = document
		.get_element_by_id(parent_id)
		.ok_or_else(|| JsValue::from_str(&format!("no element with id '{parent_id}'")))?;

	let settings = Settings::default();
	let component = InterestFormComponent::new(ConsoleSink)
		.with_pin_visible(settings.pin_visible_by_default);
	mount(&parent, &component, &settings)?;
	Ok(())
}

fn input_element(document: &Document, name: &str) -> Result<HtmlInputElement, JsValue> {
	document
		.get_element_by_id(name)
		.ok_or_else(|| JsValue::from_str(&format!("no input for field '{name}'")))?
		.dyn_into::<HtmlInputElement>()
		.map_err(|_| JsValue::from_str(&format!("element '{name}' is not an input")))
}

fn bind_input(
	document: &Document,
	component: &InterestFormComponent,
	field: &dyn FormField,
) -> Result<(), JsValue> {
	let input = input_element(document, field.name())?;
	let name = field.name().to_string();
	let component = component.clone();
	let input_clone = input.clone();

	let closure = Closure::wrap(Box::new(move |_event: Event| {
		match component.handle_change(&name, &input_clone.value()) {
			Ok(formatted) => {
				if formatted != input_clone.value() {
					input_clone.set_value(&formatted);
				}
			}
			Err(err) => web_sys::console::error_1(&err.to_string().into()),
		}
	}) as Box<dyn FnMut(_)>);

	input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
	closure.forget(); // Keep closure alive
	Ok(())
}

fn bind_errors(
	document: &Document,
	component: &InterestFormComponent,
	name: &str,
) -> Result<(), JsValue> {
	let input = input_element(document, name)?;
	let container = input
		.closest(&format!(".{FIELD_CLASS}"))?
		.ok_or_else(|| JsValue::from_str(&format!("field '{name}' has no container")))?;
	let document = document.clone();
	let name = name.to_string();

	component.errors_signal().subscribe(move |errors: &ErrorMap| {
		if let Err(err) = sync_error(&document, &container, &input, &name, errors.get(&name)) {
			web_sys::console::error_1(&err);
		}
	});
	Ok(())
}

fn sync_error(
	document: &Document,
	container: &Element,
	input: &HtmlInputElement,
	name: &str,
	message: Option<&str>,
) -> Result<(), JsValue> {
	let id = error_id(name);
	let existing = document.get_element_by_id(&id);

	match message {
		Some(message) => {
			input.class_list().add_1(INPUT_ERROR_CLASS)?;
			let paragraph = match existing {
				Some(paragraph) => paragraph,
				None => {
					let paragraph = document.create_element("p")?;
					paragraph.set_id(&id);
					paragraph.set_class_name(ERROR_CLASS);
					container.append_child(&paragraph)?;
					paragraph
				}
			};
			paragraph.set_text_content(Some(message));
		}
		None => {
			input.class_list().remove_1(INPUT_ERROR_CLASS)?;
			if let Some(paragraph) = existing {
				paragraph.remove();
			}
		}
	}
	Ok(())
}

fn bind_toggle(document: &Document, component: &InterestFormComponent) -> Result<(), JsValue> {
	let Some(button) = document.query_selector(&format!(".{TOGGLE_CLASS}"))? else {
		return Ok(());
	};
	let Some(field) = component
		.form()
		.fields()
		.iter()
		.find(|f| InterestFormComponent::is_pin_field(f.name()))
	else {
		return Ok(());
	};
	let input = input_element(document, field.name())?;

	let target = component.clone();
	let closure = Closure::wrap(Box::new(move |_event: Event| {
		target.toggle_pin_visibility();
	}) as Box<dyn FnMut(_)>);
	button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
	closure.forget(); // Keep closure alive

	let form = component.clone();
	let name = field.name().to_string();
	component.pin_signal().subscribe(move |visible: &bool| {
		let (text, aria) = toggle_labels(*visible);
		if let Some(field) = form.form().get_field(&name) {
			input.set_type(input_type(field, *visible));
		}
		button.set_text_content(Some(text));
		if let Err(err) = button.set_attribute("aria-label", aria) {
			web_sys::console::error_1(&err);
		}
	});
	Ok(())
}

fn bind_submit(form: &Element, component: &InterestFormComponent) -> Result<(), JsValue> {
	let component = component.clone();

	let closure = Closure::wrap(Box::new(move |event: Event| {
		event.prevent_default();
		if let Err(err) = component.handle_submit() {
			web_sys::console::error_1(&format!("Submit error: {err}").into());
		}
	}) as Box<dyn FnMut(_)>);

	form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
	closure.forget(); // Keep closure alive
	Ok(())
}
