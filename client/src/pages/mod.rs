//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages assume their route guard has already admitted the session; they
//! compose `components` and own page-level state such as the refresh counter
//! and which dialog is open.

pub mod admin_dashboard;
pub mod admin_register;
pub mod broker_dashboard;
pub mod dashboard;
pub mod landing;
pub mod login;
