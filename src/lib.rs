//! Weather lookup TUI
//!
//! Retrieves stored weather records from the record service by id and
//! renders them. The library exposes the app's modules for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod effect;
pub mod format;
pub mod reducer;
pub mod state;
