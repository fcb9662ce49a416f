use crate::{
	components::{UserView, UserViewProps},
	config::AppConfig,
	session::{FetchStatus, FetchTracker, SessionDisplay, UserList},
	util::{query, web_ext::ElementExt},
};
use anyhow::anyhow;
use gloo_events::EventListener;
use std::{
	cell::{Cell, RefCell},
	rc::Rc,
};
use web_sys::Element;
use yew::AppHandle;

pub static LOADING_CLASS: &str = "loading";

/// Everything the page needs at runtime, built once at startup.
pub struct App {
	config: AppConfig,
	container: Element,
	users: RefCell<UserList>,
	fetch: Cell<FetchTracker>,
	view: RefCell<AppHandle<UserView>>,
	listeners: RefCell<Vec<EventListener>>,
}

impl App {
	/// Finds the app container and user region on the current page.
	pub fn from_page(config: AppConfig) -> anyhow::Result<Rc<Self>> {
		let document = gloo_utils::document();
		let container = query(&document, &config.app_selector)?;
		let user_region = query(&document, &config.user_selector)?;
		Ok(Self::new(config, container, user_region))
	}

	/// Mounts the (empty) session view into `user_region`, replacing whatever it held.
	pub fn new(config: AppConfig, container: Element, user_region: Element) -> Rc<Self> {
		let users = UserList::default();
		let props = UserViewProps {
			display: SessionDisplay::render(&users),
		};
		let view = yew::Renderer::<UserView>::with_root_and_props(user_region, props).render();
		let app = Rc::new(Self {
			config,
			container,
			users: RefCell::new(users),
			fetch: Cell::new(FetchTracker::default()),
			view: RefCell::new(view),
			listeners: RefCell::new(Vec::new()),
		});
		app.bind_refresh();
		app
	}

	fn bind_refresh(self: &Rc<Self>) {
		let buttons = match self.container.query_selector_all(&self.config.refresh_selector) {
			Ok(buttons) => buttons,
			Err(err) => {
				log::error!(target: "app", "bad refresh selector {:?}: {err:?}", self.config.refresh_selector);
				return;
			}
		};
		let mut listeners = self.listeners.borrow_mut();
		for idx in 0..buttons.length() {
			let Some(button) = buttons.get(idx) else {
				continue;
			};
			let app = Rc::downgrade(self);
			listeners.push(EventListener::new(&button, "click", move |_| {
				if let Some(app) = app.upgrade() {
					app.load_current_user();
				}
			}));
		}
		log::debug!(target: "app", "bound {} refresh button(s)", listeners.len());
	}

	pub fn config(&self) -> &AppConfig {
		&self.config
	}

	pub fn status(&self) -> FetchStatus {
		self.fetch.get().status()
	}

	pub fn fetch_tracker(&self) -> FetchTracker {
		self.fetch.get()
	}

	pub fn users(&self) -> UserList {
		self.users.borrow().clone()
	}

	/// Fetches the signed-in user and redraws the region once the response arrives.
	///
	/// Failures are logged and leave the current display untouched.
	pub fn load_current_user(self: &Rc<Self>) {
		let app = self.clone();
		self.load_with(async move { app.fetch_users().await });
	}

	/// Like [`Self::load_current_user`], but only if no fetch was ever started.
	pub fn load_current_user_once(self: &Rc<Self>) {
		if self.status().was_called() {
			return;
		}
		self.load_current_user();
	}

	/// Runs `fetch` as the newest users fetch and applies its result unless a later one was started meanwhile.
	pub fn load_with<F>(self: &Rc<Self>, fetch: F)
	where
		F: std::future::Future<Output = anyhow::Result<UserList>> + 'static,
	{
		let ticket = self.track(FetchTracker::begin);
		let app = self.clone();
		crate::util::spawn_local("session", async move {
			let result = fetch.await;
			app.complete(ticket, result)
		});
	}

	fn complete(&self, ticket: u64, result: anyhow::Result<UserList>) -> anyhow::Result<()> {
		let current = self.track(|fetch| fetch.finish(ticket, result.is_ok()));
		let users = result?;
		if !current {
			log::debug!(target: "session", "dropping users from superseded fetch #{ticket}");
			return Ok(());
		}
		self.replace_users(users);
		Ok(())
	}

	async fn fetch_users(&self) -> anyhow::Result<UserList> {
		let base = gloo_utils::document()
			.base_uri()
			.ok()
			.flatten()
			.ok_or_else(|| anyhow!("document has no base uri"))?;
		let endpoint = self.config.users_url(&base)?;
		UserList::fetch(endpoint).await
	}

	/// Stores a list and redraws.
	pub fn replace_users(&self, users: UserList) {
		*self.users.borrow_mut() = users;
		self.render();
	}

	/// Redraws the user region from the current list and returns what was drawn.
	pub fn render(&self) -> SessionDisplay {
		let display = SessionDisplay::render(&self.users.borrow());
		self.view.borrow_mut().update(UserViewProps {
			display: display.clone(),
		});
		display
	}

	fn track<T>(&self, update: impl FnOnce(&mut FetchTracker) -> T) -> T {
		let mut fetch = self.fetch.get();
		let output = update(&mut fetch);
		self.fetch.set(fetch);
		if fetch.status().is_loading() {
			self.container.add_class(LOADING_CLASS);
		} else {
			self.container.remove_class(LOADING_CLASS);
		}
		output
	}
}
