//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser calls and display rules from page and
//! component logic so the rules stay testable without a DOM.

pub mod alert;
pub mod category;
pub mod format;
pub mod risk;
