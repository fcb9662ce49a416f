use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
	// the server spells it `Name`
	#[serde(default, alias = "Name")]
	pub name: String,
	#[serde(default, rename = "logoutURL")]
	pub logout_url: String,
}
