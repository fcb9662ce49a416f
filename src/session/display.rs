use super::UserList;

pub static SIGN_OUT_LABEL: &str = "Sign out";
pub static SIGN_OUT_CLASS: &str = "sign-out";
pub static SIGN_OUT_ICON: &str = "ui-icon-person";

/// What the user region shows for a given [`UserList`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionDisplay {
	pub user: Option<SignedIn>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignedIn {
	pub name: String,
	pub sign_out_href: String,
}

impl SessionDisplay {
	pub fn render(users: &UserList) -> Self {
		let user = users.current().map(|user| SignedIn {
			name: user.name.clone(),
			sign_out_href: user.logout_url.clone(),
		});
		Self { user }
	}

	pub fn is_empty(&self) -> bool {
		self.user.is_none()
	}
}
