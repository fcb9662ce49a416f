//! Helper behaviors exported to the page's own scripts under their historical names.
//!
//! Behaviors bound from script live as long as the page, so their listeners are forgotten.

use crate::dom::{self, Attributes, AutoHideOptions, ComboOptions, HoverViewOptions, MenuOptions, TextInputOptions};
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlInputElement};

fn options<T>(value: JsValue) -> Result<T, JsValue>
where
	T: for<'de> serde::Deserialize<'de> + Default,
{
	if value.is_undefined() || value.is_null() {
		return Ok(T::default());
	}
	Ok(serde_wasm_bindgen::from_value(value)?)
}

#[wasm_bindgen(js_name = autoHide)]
pub fn auto_hide(target: &Element, handle: Option<Element>) {
	if let Some(behavior) = dom::AutoHide::attach(target, &AutoHideOptions { handle }) {
		behavior.forget();
	}
}

#[wasm_bindgen]
pub fn mpmenu(panel: &Element, handle: Option<Element>) -> Result<(), JsValue> {
	if let Some(menu) = dom::Menu::attach(panel, &MenuOptions { handle })? {
		menu.forget();
	}
	Ok(())
}

#[wasm_bindgen(js_name = hoverView)]
pub fn hover_view(element: &Element, value: JsValue) -> Result<(), JsValue> {
	let options = options::<HoverViewOptions>(value)?;
	dom::hover_view(element, &options);
	Ok(())
}

#[wasm_bindgen]
pub fn make(tag: &str, attributes: JsValue, content: Option<String>) -> Result<Element, JsValue> {
	let attributes = if attributes.is_undefined() || attributes.is_null() {
		None
	} else {
		Some(serde_wasm_bindgen::from_value::<Attributes>(attributes)?)
	};
	Ok(dom::make(tag, attributes.as_ref(), content.as_deref())?)
}

#[wasm_bindgen(js_name = appendNew)]
pub fn append_new(
	parent: &Element,
	tag: &str,
	attributes: JsValue,
	content: Option<String>,
) -> Result<Element, JsValue> {
	let element = make(tag, attributes, content)?;
	parent.append_child(&element)?;
	// returns the parent so calls chain like the jQuery version
	Ok(parent.clone())
}

#[wasm_bindgen(js_name = makeIcon)]
pub fn make_icon(icon_class: &str, large: Option<bool>) -> Result<Element, JsValue> {
	Ok(dom::make_icon(icon_class, large.unwrap_or_default())?)
}

#[wasm_bindgen(js_name = makeRemoveIcon)]
pub fn make_remove_icon() -> Result<Element, JsValue> {
	Ok(dom::make_remove_icon()?)
}

#[wasm_bindgen(js_name = textInput)]
pub fn text_input(input: &HtmlInputElement, value: JsValue) -> Result<(), JsValue> {
	let options = options::<TextInputOptions>(value)?;
	dom::TextInput::attach(input, &options).forget();
	Ok(())
}

#[wasm_bindgen]
pub fn combo(input: &HtmlInputElement, value: JsValue) -> Result<(), JsValue> {
	let options = options::<ComboOptions>(value)?;
	dom::Combo::attach(input, &options)?.forget();
	Ok(())
}

/// Pads a string or number; page scripts mostly pass numbers.
#[wasm_bindgen]
pub fn zfill(value: JsValue, count: usize) -> String {
	let text = value
		.as_string()
		.or_else(|| value.as_f64().map(|number| number.to_string()))
		.unwrap_or_default();
	dom::zfill(text, count)
}
