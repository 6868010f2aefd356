//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the authenticated session and its persistence, `login`
//! classifies sign-in failures, and `remote`/`forms` hold per-component fetch
//! and draft state.

pub mod forms;
pub mod login;
pub mod remote;
pub mod session;
