use crate::util::web_ext::ElementExt;
use gloo_events::EventListener;
use web_sys::Element;

#[derive(Debug, Clone, Default)]
pub struct AutoHideOptions {
	/// Hovering over this element reveals the target.
	pub handle: Option<Element>,
}

/// Keeps a target hidden except while the pointer is over its handle.
#[must_use = "dropping AutoHide detaches its listeners"]
pub struct AutoHide {
	enter: EventListener,
	leave: EventListener,
}

impl AutoHide {
	/// Hides `target` and binds the hover listeners. Without a handle nothing is attached.
	pub fn attach(target: &Element, options: &AutoHideOptions) -> Option<Self> {
		let handle = options.handle.as_ref()?;
		target.hide();
		let enter = EventListener::new(handle, "mouseenter", {
			let target = target.clone();
			move |_| target.show()
		});
		let leave = EventListener::new(handle, "mouseleave", {
			let target = target.clone();
			move |_| target.hide()
		});
		Some(Self { enter, leave })
	}

	pub fn forget(self) {
		self.enter.forget();
		self.leave.forget();
	}
}
