use crate::util::error::Error;
use serde::Deserialize;
use std::collections::BTreeMap;
use web_sys::Element;

pub static ICON_CLASS: &str = "ui-icon";
pub static INLINE_CLASS: &str = "inline";
pub static LARGE_CLASS: &str = "large";
pub static REMOVE_ICON_CLASSES: [&str; 3] = ["remove", "ui-icon", "ui-icon-close"];

/// Second argument of [`make`]: either raw inner html or a set of attributes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Attributes {
	Html(String),
	Map(BTreeMap<String, String>),
}

impl From<&str> for Attributes {
	fn from(html: &str) -> Self {
		Self::Html(html.to_owned())
	}
}

impl<const N: usize> From<[(&str, &str); N]> for Attributes {
	fn from(pairs: [(&str, &str); N]) -> Self {
		let map = pairs
			.into_iter()
			.map(|(name, value)| (name.to_owned(), value.to_owned()))
			.collect();
		Self::Map(map)
	}
}

/// Creates a detached `<tag>` element.
///
/// `content`, when present, becomes the inner html and wins over an html
/// string passed as `attributes`.
pub fn make(tag: &str, attributes: Option<&Attributes>, content: Option<&str>) -> Result<Element, Error> {
	let element = gloo_utils::document().create_element(tag)?;
	match attributes {
		Some(Attributes::Html(html)) => element.set_inner_html(html),
		Some(Attributes::Map(map)) => {
			for (name, value) in map {
				element.set_attribute(name, value)?;
			}
		}
		None => {}
	}
	if let Some(content) = content.filter(|content| !content.is_empty()) {
		element.set_inner_html(content);
	}
	Ok(element)
}

/// Like [`make`], but appends the new element to `parent` and returns it.
pub fn append_new(
	parent: &Element,
	tag: &str,
	attributes: Option<&Attributes>,
	content: Option<&str>,
) -> Result<Element, Error> {
	let element = make(tag, attributes, content)?;
	parent.append_child(&element)?;
	Ok(element)
}

/// Classes carried by an icon span for the named `icon_class` variant.
pub fn icon_classes(icon_class: &str, large: bool) -> Vec<&str> {
	let mut classes = vec![ICON_CLASS, INLINE_CLASS, icon_class];
	if large {
		classes.push(LARGE_CLASS);
	}
	classes
}

pub fn make_icon(icon_class: &str, large: bool) -> Result<Element, Error> {
	let icon = make("span", None, None)?;
	icon.set_class_name(&icon_classes(icon_class, large).join(" "));
	Ok(icon)
}

/// The small "×" used to remove tags and pairings.
pub fn make_remove_icon() -> Result<Element, Error> {
	let icon = make("span", None, None)?;
	icon.set_class_name(&REMOVE_ICON_CLASSES.join(" "));
	Ok(icon)
}
