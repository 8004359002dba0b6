//! Command implementations for refnote

pub mod add;
pub mod config;
pub mod dispatch;
pub mod edit;
pub mod helpers;
pub mod remove;
pub mod templates;
