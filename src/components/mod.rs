pub mod error_alert;
pub mod lookup_panel;
pub mod record_card;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use error_alert::{ErrorAlert, ErrorAlertProps};
pub use lookup_panel::{LookupPanel, LookupPanelProps};
pub use record_card::{RecordCard, RecordCardProps};
