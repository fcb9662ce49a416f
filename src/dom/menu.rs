use super::make_icon;
use crate::util::{
	error::Error,
	web_ext::{ElementExt, Offset},
};
use gloo_events::EventListener;
use std::{cell::Cell, rc::Rc};
use web_sys::Element;

pub static COLLAPSED_ICON: &str = "ui-icon-triangle-1-e";
pub static EXPANDED_ICON: &str = "ui-icon-triangle-1-s";
static MENU_CLASSES: [&str; 2] = ["menu", "ui-corner-bottom"];

#[derive(Debug, Clone, Default)]
pub struct MenuOptions {
	/// Clicking this element opens and closes the menu.
	pub handle: Option<Element>,
}

/// Where the handle currently sits on the page. `height` is the content height, so the
/// panel starts right under the handle's content box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Anchor {
	pub offset: Offset,
	pub height: f64,
}

impl Anchor {
	pub fn of(handle: &Element) -> Self {
		Self {
			offset: handle.offset(),
			height: handle.content_height(),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MenuState {
	#[default]
	Hidden,
	/// Shown with the panel's top-left corner at this document position.
	Shown { top: f64, left: f64 },
}

impl MenuState {
	/// Next state after a click on the handle.
	///
	/// The anchor is only measured when opening, so a handle that moved since
	/// the last open still gets the panel right below it.
	pub fn toggle(self, anchor: impl FnOnce() -> Anchor) -> Self {
		match self {
			Self::Hidden => {
				let anchor = anchor();
				Self::Shown {
					top: anchor.offset.top + anchor.height,
					left: anchor.offset.left,
				}
			}
			Self::Shown { .. } => Self::Hidden,
		}
	}

	pub fn is_shown(&self) -> bool {
		matches!(self, Self::Shown { .. })
	}

	pub fn disclosure_icon(&self) -> &'static str {
		match self {
			Self::Hidden => COLLAPSED_ICON,
			Self::Shown { .. } => EXPANDED_ICON,
		}
	}
}

/// A panel revealed below its handle on click.
#[must_use = "dropping Menu detaches the click listener"]
pub struct Menu {
	panel: Element,
	icon: Element,
	state: Rc<Cell<MenuState>>,
	listener: EventListener,
}

impl Menu {
	/// Turns `panel` into a drop-down for the handle in `options`.
	///
	/// The panel is moved to `<body>` so no ancestor can clip it, and a
	/// disclosure icon is prepended to the handle. Without a handle nothing is attached.
	pub fn attach(panel: &Element, options: &MenuOptions) -> Result<Option<Self>, Error> {
		let Some(handle) = options.handle.as_ref() else {
			return Ok(None);
		};
		let icon = make_icon(COLLAPSED_ICON, false)?;
		handle.prepend_with_node_1(&icon)?;

		let body = gloo_utils::document().body().ok_or(Error::MissingBody)?;
		panel.hide();
		body.append_child(panel)?;
		for class in MENU_CLASSES {
			panel.add_class(class);
		}

		let state = Rc::new(Cell::new(MenuState::Hidden));
		let listener = EventListener::new(handle, "click", {
			let handle = handle.clone();
			let panel = panel.clone();
			let icon = icon.clone();
			let state = state.clone();
			move |_| {
				let next = state.get().toggle(|| Anchor::of(&handle));
				apply(&panel, &icon, next);
				state.set(next);
			}
		});

		Ok(Some(Self {
			panel: panel.clone(),
			icon,
			state,
			listener,
		}))
	}

	pub fn state(&self) -> MenuState {
		self.state.get()
	}

	/// Hides the panel as if the handle had been clicked while open.
	pub fn close(&self) {
		self.state.set(MenuState::Hidden);
		apply(&self.panel, &self.icon, MenuState::Hidden);
	}

	pub fn forget(self) {
		self.listener.forget();
	}
}

fn apply(panel: &Element, icon: &Element, state: MenuState) {
	icon.remove_class(COLLAPSED_ICON);
	icon.remove_class(EXPANDED_ICON);
	icon.add_class(state.disclosure_icon());
	match state {
		MenuState::Shown { top, left } => {
			panel.set_css_px("top", top);
			panel.set_css_px("left", left);
			panel.show();
		}
		MenuState::Hidden => panel.hide(),
	}
}
