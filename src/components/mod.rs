//! UI Components
//!
//! Reusable Leptos components for the console.

pub mod loading;
pub mod sidebar;
pub mod toast;

pub use loading::{ListSkeleton, Loading};
pub use sidebar::Sidebar;
pub use toast::Toast;
