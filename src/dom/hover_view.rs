use crate::util::{
	error::Error,
	web_ext::{ElementExt, Offset},
};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use serde::Deserialize;
use std::{cell::RefCell, rc::Rc};
use web_sys::Element;

/// Left offsets under this are close enough to the left edge to anchor on it.
pub static LEFT_EDGE_THRESHOLD: f64 = 200.0;
static HOVER_VIEW_CLASSES: [&str; 2] = ["hover-view", "ui-widget-content"];
static CARD_SHOW_DELAY_MS: u32 = 1000;
static CARD_ORPHAN_MS: u32 = 20_000;
static CARD_GAP: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct HoverViewOptions {
	pub left: Option<f64>,
	pub right: Option<f64>,
	pub top: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizontal {
	Left(f64),
	Right(f64),
}

/// Css offsets to apply to a hover view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
	pub horizontal: Option<Horizontal>,
	pub top: Option<f64>,
}

impl From<&HoverViewOptions> for Placement {
	fn from(options: &HoverViewOptions) -> Self {
		let horizontal = match (options.left, options.right) {
			(Some(left), Some(_)) if left < LEFT_EDGE_THRESHOLD => Some(Horizontal::Left(left)),
			(Some(_), Some(right)) => Some(Horizontal::Right(right)),
			(Some(left), None) => Some(Horizontal::Left(left)),
			(None, Some(right)) => Some(Horizontal::Right(right)),
			(None, None) => None,
		};
		Self {
			horizontal,
			top: options.top,
		}
	}
}

/// Styles `element` as a floating hover view placed per `options`.
pub fn hover_view(element: &Element, options: &HoverViewOptions) -> Placement {
	for class in HOVER_VIEW_CLASSES {
		element.add_class(class);
	}
	let placement = Placement::from(options);
	match placement.horizontal {
		Some(Horizontal::Left(left)) => element.set_css_px("left", left),
		Some(Horizontal::Right(right)) => element.set_css_px("right", right),
		None => {}
	}
	if let Some(top) = placement.top {
		element.set_css_px("top", top);
	}
	placement
}

/// Options for a card hanging just under a trigger of the given size.
pub fn card_options(offset: Offset, width: f64, height: f64, window_width: f64) -> HoverViewOptions {
	HoverViewOptions {
		left: Some(offset.left),
		right: Some(window_width - (offset.left + width)),
		top: Some(offset.top + height + CARD_GAP),
	}
}

/// A detail card that pops up after hovering a trigger for a moment.
///
/// The card is built lazily by `build` once the delay elapses. Leaving the
/// trigger removes it, as does clicking it or the orphan timeout.
#[must_use = "dropping HoverCard detaches its listeners"]
pub struct HoverCard {
	state: Rc<RefCell<CardState>>,
	listeners: Vec<EventListener>,
}

#[derive(Default)]
struct CardState {
	pending: Option<Timeout>,
	card: Option<Element>,
	orphan: Option<Timeout>,
	dismiss: Option<EventListener>,
}

impl CardState {
	fn clear(&mut self) {
		self.pending = None;
		self.orphan = None;
		self.dismiss = None;
		if let Some(card) = self.card.take() {
			card.remove();
		}
	}
}

impl HoverCard {
	pub fn attach<F>(trigger: &Element, build: F) -> Self
	where
		F: Fn(&Element) -> Result<(), Error> + 'static,
	{
		let state = Rc::new(RefCell::new(CardState::default()));
		let build = Rc::new(build);
		let enter = EventListener::new(trigger, "mouseenter", {
			let trigger = trigger.clone();
			let state = state.clone();
			move |_| {
				let mut current = state.borrow_mut();
				if current.pending.is_some() || current.card.is_some() {
					return;
				}
				let trigger = trigger.clone();
				let build = build.clone();
				let shared = state.clone();
				current.pending = Some(Timeout::new(CARD_SHOW_DELAY_MS, move || {
					if let Err(err) = show_card(&trigger, &shared, &*build) {
						log::error!(target: "dom", "failed to show hover card: {err}");
						shared.borrow_mut().clear();
					}
				}));
			}
		});
		let leave = EventListener::new(trigger, "mouseleave", {
			let state = state.clone();
			move |_| state.borrow_mut().clear()
		});
		Self {
			state,
			listeners: vec![enter, leave],
		}
	}

	pub fn forget(mut self) {
		for listener in std::mem::take(&mut self.listeners) {
			listener.forget();
		}
	}
}

impl Drop for HoverCard {
	fn drop(&mut self) {
		// a forgotten card keeps working for the life of the page
		if self.listeners.is_empty() {
			return;
		}
		self.state.borrow_mut().clear();
	}
}

fn show_card(
	trigger: &Element,
	state: &Rc<RefCell<CardState>>,
	build: &dyn Fn(&Element) -> Result<(), Error>,
) -> Result<(), Error> {
	let card = gloo_utils::document().create_element("div")?;
	card.hide();
	build(&card)?;

	let window_width = gloo_utils::window()
		.inner_width()?
		.as_f64()
		.unwrap_or_default();
	let options = card_options(trigger.offset(), trigger.outer_width(), trigger.outer_height(), window_width);
	hover_view(&card, &options);

	let body = gloo_utils::document().body().ok_or(Error::MissingBody)?;
	body.append_child(&card)?;
	card.show();

	let dismiss = EventListener::new(&card, "click", {
		let state = state.clone();
		move |_| state.borrow_mut().clear()
	});
	let orphan = Timeout::new(CARD_ORPHAN_MS, {
		let state = state.clone();
		move || {
			log::debug!(target: "dom", "removing orphaned hover card");
			state.borrow_mut().clear();
		}
	});

	let mut current = state.borrow_mut();
	current.pending = None;
	current.card = Some(card);
	current.dismiss = Some(dismiss);
	current.orphan = Some(orphan);
	Ok(())
}
