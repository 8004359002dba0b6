//! Core domain logic for refnote
//!
//! Data flow: citekey -> BBT search -> candidate resolution -> field
//! normalization -> note rendering -> note store. Everything is synchronous
//! and runs to completion or aborts; no state survives an invocation except
//! the note files and the user config.

pub mod bbt;
pub mod citekey;
pub mod config;
pub mod error;
pub mod fields;
pub mod interaction;
pub mod logging;
pub mod note;
pub mod resolver;
pub mod store;
