//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock,
//! task lifetimes) from page and component logic so that logic stays
//! testable natively.

pub mod clock;
pub mod format;
pub mod guard;
pub mod lifetime;
pub mod storage;
