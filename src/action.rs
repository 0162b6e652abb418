//! Actions - user intents and async lookup results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherRecord;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Query category =====
    /// Query text changed (stored verbatim)
    QueryChange(String),

    // ===== Lookup category =====
    /// Intent: look up the record for the current query (triggers async task)
    LookupSubmit,

    /// Result: record retrieved
    LookupDidLoad(WeatherRecord),

    /// Result: lookup failed, carries the message to display
    LookupDidError(String),

    // ===== Uncategorized (global) =====
    /// Force a re-render (for cursor movement, etc.)
    Render,

    /// Exit the application
    Quit,
}
