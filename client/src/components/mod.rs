//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Data components (cards, chart, tables) fetch their own data with the
//! session token and refetch when the page's refresh counter changes. Dialog
//! components post new records and report back through callbacks.

pub mod balance_chart;
pub mod header;
pub mod investor_form;
pub mod investors_table;
pub mod modal;
pub mod record_forms;
pub mod summary_cards;
pub mod transactions_table;
