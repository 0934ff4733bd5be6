//! Pages
//!
//! Top-level page components for each route.

pub mod blog;
pub mod chats;
pub mod crowdfunding;
pub mod dashboard;
pub mod experts;
pub mod finn;
pub mod home;
pub mod login;

pub use blog::Blog;
pub use chats::Chats;
pub use crowdfunding::Crowdfunding;
pub use dashboard::Dashboard;
pub use experts::Experts;
pub use finn::Finn;
pub use home::Home;
pub use login::Login;
