//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the read-only result panels and the loading indicator.
//! They take plain data as props; pages own state and data fetching.

pub mod file_list;
pub mod findings_panel;
pub mod loading_indicator;
pub mod status_banner;
