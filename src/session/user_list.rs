use super::User;
use crate::response::Response;
use serde::Deserialize;

/// Users returned by the users endpoint: the signed-in user, or nobody.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct UserList(Vec<User>);

impl UserList {
	pub fn new(users: Vec<User>) -> Self {
		Self(users)
	}

	pub async fn fetch(endpoint: url::Url) -> anyhow::Result<Self> {
		log::debug!(target: "session", "fetching users from {endpoint}");
		let builder = reqwest::Client::new()
			.get(endpoint)
			.header("Accept", "application/json");
		let users = Response::<Self>::from(builder).send().await?;
		log::info!(target: "session", "loaded {} user(s)", users.len());
		Ok(users)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// The signed-in user. Extra entries are ignored.
	pub fn current(&self) -> Option<&User> {
		self.0.first()
	}

	pub fn iter(&self) -> impl Iterator<Item = &User> + '_ {
		self.0.iter()
	}
}
