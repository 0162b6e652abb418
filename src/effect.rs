//! Effects - side effects declared by the reducer

use tracing::{info, warn};

use crate::action::Action;
use crate::api::LookupClient;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Retrieve the stored record with the given (already trimmed) id
    FetchRecord { id: String },
}

/// Run a record fetch to completion.
///
/// Resolves to exactly one completion action on every path, which is
/// what lowers the loading flag.
pub async fn fetch_record(client: &LookupClient, id: &str) -> Action {
    match client.fetch_record(id).await {
        Ok(record) => {
            info!(%id, "record loaded");
            Action::LookupDidLoad(record)
        }
        Err(e) => {
            warn!(%id, error = %e, "lookup failed");
            Action::LookupDidError(e.user_message())
        }
    }
}
