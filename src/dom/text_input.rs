use crate::util::web_ext::ElementExt;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use serde::Deserialize;
use web_sys::HtmlInputElement;

// selecting right in the focus handler gets undone by the browser
static SELECT_DELAY_MS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextInputOptions {
	pub size: u32,
}

impl Default for TextInputOptions {
	fn default() -> Self {
		Self { size: 20 }
	}
}

/// Default styling for text inputs: widget class, fixed size, select-all on focus.
#[must_use = "dropping TextInput detaches the focus listener"]
pub struct TextInput {
	focus: EventListener,
}

impl TextInput {
	pub fn attach(input: &HtmlInputElement, options: &TextInputOptions) -> Self {
		input.add_class("ui-widget");
		input.set_size(options.size);
		let focus = EventListener::new(input, "focus", {
			let input = input.clone();
			move |_| {
				let input = input.clone();
				Timeout::new(SELECT_DELAY_MS, move || {
					let focused = gloo_utils::document().active_element();
					let element: &web_sys::Element = input.as_ref();
					if focused.as_ref() == Some(element) {
						input.select();
					}
				})
				.forget();
			}
		});
		Self { focus }
	}

	pub fn forget(self) {
		self.focus.forget();
	}
}
