//! Browser-side pieces of the mealplanner web app: the signed-in user widget
//! and the small element behaviors shared by the page scripts.

pub mod app;
pub use app::App;
pub mod bindings;
pub mod components;
pub mod config;
pub mod dom;
pub mod logging;
pub mod response;
pub mod session;
pub mod util;

/// Builds the [`App`] for the current page and starts loading the signed-in user.
pub fn run(config: config::AppConfig) -> anyhow::Result<std::rc::Rc<App>> {
	let app = App::from_page(config)?;
	app.load_current_user_once();
	Ok(app)
}
