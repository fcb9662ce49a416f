use log::LevelFilter;
use serde::Deserialize;
use url::Url;

/// Id of the optional `<script type="application/json">` element holding an [`AppConfig`].
pub static CONFIG_ELEMENT_ID: &str = "mealplanner-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
	/// Path (relative to the document base) listing the signed-in user.
	pub users_endpoint: String,
	pub app_selector: String,
	pub user_selector: String,
	/// Buttons inside the app container that reload the session.
	pub refresh_selector: String,
	pub log_level: LevelFilter,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			users_endpoint: "/users".into(),
			app_selector: "#app".into(),
			user_selector: "#user".into(),
			refresh_selector: ".refresh".into(),
			log_level: LevelFilter::Info,
		}
	}
}

impl AppConfig {
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Reads the page's config element, falling back to defaults when it is absent or unreadable.
	pub fn from_page() -> Self {
		let element = gloo_utils::document().get_element_by_id(CONFIG_ELEMENT_ID);
		let Some(text) = element.and_then(|element| element.text_content()) else {
			return Self::default();
		};
		match Self::from_json(&text) {
			Ok(config) => config,
			Err(err) => {
				log::error!(target: "app", "ignoring malformed #{CONFIG_ELEMENT_ID}: {err}");
				Self::default()
			}
		}
	}

	pub fn users_url(&self, base: &str) -> Result<Url, url::ParseError> {
		Url::parse(base)?.join(&self.users_endpoint)
	}
}
