//! The signed-in user shown in the page header.
//!
//! Data flows one way: [`UserList::fetch`] produces a list, the app stores it,
//! and [`SessionDisplay::render`] turns the stored list into what the
//! [`UserView`](crate::components::UserView) draws.

mod display;
pub use display::*;
mod user;
pub use user::*;
mod user_list;
pub use user_list::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
	#[default]
	NotCalled,
	InFlight,
	Fetched,
	Failed,
}

impl FetchStatus {
	pub fn was_called(&self) -> bool {
		!matches!(self, Self::NotCalled)
	}

	pub fn is_loading(&self) -> bool {
		matches!(self, Self::InFlight)
	}
}

/// Bookkeeping for the users fetches issued by the app.
///
/// Every fetch gets a ticket; only the most recent ticket may settle the
/// status, so an older response arriving late is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchTracker {
	status: FetchStatus,
	latest: u64,
}

impl FetchTracker {
	pub fn status(&self) -> FetchStatus {
		self.status
	}

	pub fn latest(&self) -> u64 {
		self.latest
	}

	pub fn begin(&mut self) -> u64 {
		self.latest += 1;
		self.status = FetchStatus::InFlight;
		self.latest
	}

	/// Settles fetch `ticket`. Returns false, changing nothing, when a newer fetch was started since.
	pub fn finish(&mut self, ticket: u64, succeeded: bool) -> bool {
		if ticket != self.latest {
			return false;
		}
		self.status = if succeeded {
			FetchStatus::Fetched
		} else {
			FetchStatus::Failed
		};
		true
	}
}
