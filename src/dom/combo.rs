use super::make;
use crate::util::{error::Error, web_ext::ElementExt};
use gloo_events::EventListener;
use serde::Deserialize;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};

pub static BUTTON_LABEL: &str = "Show suggested values";
static BUTTON_ICON: &str = "ui-icon-triangle-1-s";
static LIST_CLASSES: &str = "ui-autocomplete ui-menu ui-widget ui-widget-content ui-corner-all";
static ITEM_CLASS: &str = "ui-menu-item";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComboOptions {
	/// Values offered as suggestions.
	pub source: Vec<String>,
	/// Shortest term that opens the list. A combo always uses 0.
	pub min_length: usize,
}

/// Entries of `source` containing `term`, ignoring case, in source order.
pub fn filter_suggestions<'a>(source: &'a [String], term: &str) -> Vec<&'a str> {
	let needle = term.to_lowercase();
	source
		.iter()
		.filter(|value| value.to_lowercase().contains(&needle))
		.map(String::as_str)
		.collect()
}

/// Suggestion list shown under an input.
pub struct Autocomplete {
	input: HtmlInputElement,
	list: Element,
	options: ComboOptions,
}

impl Autocomplete {
	fn new(input: &HtmlInputElement, options: ComboOptions) -> Result<Self, Error> {
		let list = make("ul", None, None)?;
		list.set_class_name(LIST_CLASSES);
		list.set_css("position", "absolute");
		list.hide();
		let body = gloo_utils::document().body().ok_or(Error::MissingBody)?;
		body.append_child(&list)?;
		Ok(Self {
			input: input.clone(),
			list,
			options,
		})
	}

	/// Shows the suggestions matching `term`, or closes the list when there are none.
	pub fn search(&self, term: &str) -> Result<(), Error> {
		if term.chars().count() < self.options.min_length {
			self.close();
			return Ok(());
		}
		let matches = filter_suggestions(&self.options.source, term);
		if matches.is_empty() {
			self.close();
			return Ok(());
		}
		self.list.set_inner_html("");
		for value in matches {
			let item = make("li", None, None)?;
			item.set_class_name(ITEM_CLASS);
			item.set_text_content(Some(value));
			self.list.append_child(&item)?;
		}
		let offset = self.input.offset();
		self.list.set_css_px("top", offset.top + self.input.outer_height());
		self.list.set_css_px("left", offset.left);
		self.list.show();
		Ok(())
	}

	pub fn close(&self) {
		self.list.hide();
	}

	pub fn list(&self) -> &Element {
		&self.list
	}

	pub fn is_open(&self) -> bool {
		!self.list.is_hidden()
	}

	fn pick(&self, item: &Element) {
		if !item.has_class(ITEM_CLASS) {
			return;
		}
		self.input.set_value(&item.text_content().unwrap_or_default());
		self.close();
	}
}

// the listeners of a live Combo hold the last references
impl Drop for Autocomplete {
	fn drop(&mut self) {
		self.list.remove();
	}
}

/// A text input with suggestions and a button that opens the full list.
#[must_use = "dropping Combo detaches its listeners"]
pub struct Combo {
	autocomplete: Rc<Autocomplete>,
	button: Element,
	listeners: Vec<EventListener>,
}

impl Combo {
	pub fn attach(input: &HtmlInputElement, options: &ComboOptions) -> Result<Self, Error> {
		let options = ComboOptions {
			min_length: 0,
			..options.clone()
		};
		let autocomplete = Rc::new(Autocomplete::new(input, options)?);
		input.add_class("ui-widget");
		input.add_class("ui-combo");
		input.set_css("margin-right", "0");

		let button = make("div", None, None)?;
		button.set_class_name("ui-button ui-widget ui-state-default ui-button-icon-only ui-corner-right");
		button.set_attribute("title", BUTTON_LABEL)?;
		button.set_attribute("role", "button")?;
		let icon = make("span", None, None)?;
		icon.set_class_name(&format!("ui-button-icon-primary ui-icon {BUTTON_ICON}"));
		button.append_child(&icon)?;
		input.after_with_node_1(&button)?;

		let mut listeners = Vec::with_capacity(4);
		listeners.push(EventListener::new(input, "input", {
			let autocomplete = autocomplete.clone();
			move |_| {
				let term = autocomplete.input.value();
				if let Err(err) = autocomplete.search(&term) {
					log::error!(target: "dom", "autocomplete search failed: {err}");
				}
			}
		}));
		listeners.push(EventListener::new(input, "blur", {
			let autocomplete = autocomplete.clone();
			move |_| autocomplete.close()
		}));
		// mousedown lands before the input's blur closes the list
		listeners.push(EventListener::new(&autocomplete.list, "mousedown", {
			let autocomplete = autocomplete.clone();
			move |event| {
				let item = event.target().and_then(|target| target.dyn_into::<Element>().ok());
				if let Some(item) = item {
					autocomplete.pick(&item);
				}
			}
		}));
		listeners.push(EventListener::new(&button, "click", {
			let autocomplete = autocomplete.clone();
			let button = button.clone();
			move |_| {
				if let Some(button) = button.dyn_ref::<HtmlElement>() {
					let _ = button.blur();
				}
				if let Err(err) = autocomplete.search("") {
					log::error!(target: "dom", "autocomplete search failed: {err}");
				}
				let _ = autocomplete.input.focus();
			}
		}));

		Ok(Self {
			autocomplete,
			button,
			listeners,
		})
	}

	pub fn autocomplete(&self) -> &Autocomplete {
		&self.autocomplete
	}

	pub fn button(&self) -> &Element {
		&self.button
	}

	pub fn forget(self) {
		for listener in self.listeners {
			listener.forget();
		}
	}
}
