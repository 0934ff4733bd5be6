//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod empty_state;
pub mod filter_bar;
pub mod layout;
pub mod message;
pub mod nav;
pub mod progress;
pub mod toast;

pub use empty_state::EmptyState;
pub use filter_bar::{FacetSelect, SearchInput};
pub use layout::Layout;
pub use message::MessageRow;
pub use nav::Nav;
pub use progress::ProgressBar;
pub use toast::Toast;
