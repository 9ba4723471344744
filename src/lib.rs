// Kawal BLT - Core Library
// Recipient store, list controller and validation dialog, shared by the TUI and the CLI

pub mod recipient;
pub mod store;
pub mod list;
pub mod validation;
pub mod notice;
pub mod report;

// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use recipient::{
    mask_registration_number, Recipient, RecipientRecord, Region, RegistrationNumber,
    MASK_MARKER, REGISTRATION_NUMBER_LEN,
};
pub use store::{RecipientStore, StoreError};
pub use list::{visible_recipients, Screen, SortDirection, SortField, SortSpec, ViewState};
pub use validation::{verify, ValidationDialog, VerificationStatus};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
