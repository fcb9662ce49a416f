//! Small element behaviors used across the mealplanner pages.
//!
//! Each helper works only on the elements handed to it. Helpers that bind
//! events return a guard owning the listeners; dropping the guard detaches
//! them, `forget` keeps them for the life of the page.

mod auto_hide;
pub use auto_hide::*;
mod combo;
pub use combo::*;
mod hover_view;
pub use hover_view::*;
mod make;
pub use make::*;
mod menu;
pub use menu::*;
mod text_input;
pub use text_input::*;
mod zfill;
pub use zfill::*;
