//! Endfield Codex - operator database TUI
//!
//! Catalog data, the roster filter, the selection and carousel cursors,
//! and the tui-dispatch store that ties them to the terminal UI.

pub mod action;
pub mod carousel;
pub mod catalog;
pub mod components;
pub mod effect;
pub mod filter;
pub mod reducer;
pub mod selection;
pub mod state;
pub mod validate;
