mod icon;
pub use icon::*;
mod user;
pub use user::*;
