//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod positions;
pub mod register;
pub mod settings;

pub use dashboard::{DashboardHome, DashboardLayout};
pub use home::Home;
pub use login::Login;
pub use positions::Positions;
pub use register::Register;
pub use settings::Settings;
