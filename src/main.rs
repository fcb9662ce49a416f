use mealplanner_ui::{config::AppConfig, logging};

#[cfg(target_family = "wasm")]
fn main() {
	console_error_panic_hook::set_once();
	logging::wasm::init(logging::wasm::Config::default().prefer_target());
	let config = AppConfig::from_page();
	log::set_max_level(config.log_level);
	match mealplanner_ui::run(config) {
		// the app lives as long as the page
		Ok(app) => std::mem::forget(app),
		Err(err) => log::error!(target: "app", "failed to start: {err:?}"),
	}
}

#[cfg(not(target_family = "wasm"))]
fn main() {
	logging::native::init(AppConfig::default().log_level);
	log::error!(target: "app", "{} only runs in a browser; build it for wasm32", env!("CARGO_PKG_NAME"));
}
