use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Position of an element relative to the document (not the viewport).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
	pub top: f64,
	pub left: f64,
}

/// Convenience operations over [`Element`], modeled on the handful of jQuery calls the page scripts lean on.
pub trait ElementExt {
	fn show(&self);
	fn hide(&self);
	/// True when the element's inline display has been turned off.
	fn is_hidden(&self) -> bool;

	fn add_class(&self, class: &str);
	fn remove_class(&self, class: &str);
	fn has_class(&self, class: &str) -> bool;
	fn set_css(&self, property: &str, value: &str);
	fn set_css_px(&self, property: &str, value: f64) {
		self.set_css(property, &format!("{value}px"));
	}

	fn offset(&self) -> Offset;
	fn outer_width(&self) -> f64;
	/// Rendered height including padding and border.
	fn outer_height(&self) -> f64;
	/// Height of the content box, without padding or border.
	fn content_height(&self) -> f64;
}

static VERTICAL_EDGES: [&str; 4] = ["padding-top", "padding-bottom", "border-top-width", "border-bottom-width"];

/// Numeric part of a computed css length such as `"4.5px"`; anything else counts as 0.
pub fn parse_px(value: &str) -> f64 {
	value.trim().trim_end_matches("px").parse().unwrap_or_default()
}

fn style_of(element: &Element) -> Option<web_sys::CssStyleDeclaration> {
	match element.dyn_ref::<HtmlElement>() {
		Some(html) => Some(html.style()),
		None => {
			log::warn!(target: "dom", "<{}> has no inline style", element.tag_name());
			None
		}
	}
}

impl ElementExt for Element {
	fn show(&self) {
		if let Some(style) = style_of(self) {
			let _ = style.remove_property("display");
		}
	}

	fn hide(&self) {
		self.set_css("display", "none");
	}

	fn is_hidden(&self) -> bool {
		let Some(style) = style_of(self) else {
			return false;
		};
		matches!(style.get_property_value("display").as_deref(), Ok("none"))
	}

	fn add_class(&self, class: &str) {
		if let Err(err) = self.class_list().add_1(class) {
			log::error!(target: "dom", "failed to add class {class:?}: {err:?}");
		}
	}

	fn remove_class(&self, class: &str) {
		if let Err(err) = self.class_list().remove_1(class) {
			log::error!(target: "dom", "failed to remove class {class:?}: {err:?}");
		}
	}

	fn has_class(&self, class: &str) -> bool {
		self.class_list().contains(class)
	}

	fn set_css(&self, property: &str, value: &str) {
		let Some(style) = style_of(self) else {
			return;
		};
		if let Err(err) = style.set_property(property, value) {
			log::error!(target: "dom", "failed to set {property}={value:?}: {err:?}");
		}
	}

	fn offset(&self) -> Offset {
		let rect = self.get_bounding_client_rect();
		let window = gloo_utils::window();
		let scroll_x = window.scroll_x().unwrap_or_default();
		let scroll_y = window.scroll_y().unwrap_or_default();
		Offset {
			top: rect.top() + scroll_y,
			left: rect.left() + scroll_x,
		}
	}

	fn outer_width(&self) -> f64 {
		self.get_bounding_client_rect().width()
	}

	fn outer_height(&self) -> f64 {
		self.get_bounding_client_rect().height()
	}

	fn content_height(&self) -> f64 {
		let edges = match gloo_utils::window().get_computed_style(self) {
			Ok(Some(style)) => VERTICAL_EDGES
				.iter()
				.map(|property| parse_px(&style.get_property_value(property).unwrap_or_default()))
				.sum::<f64>(),
			_ => 0.0,
		};
		(self.outer_height() - edges).max(0.0)
	}
}
