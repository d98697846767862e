//! An inline-autocompleting tag entry field for terminal UIs.
//!
//! [`field::TagInput`] is the component: controlled (the host owns the
//! value), toolkit-thin, and driven entirely through events. The [`tui`]
//! module is a small ratatui host application embedding it.

pub mod cli;
pub mod field;
pub mod tui;
pub mod util;
