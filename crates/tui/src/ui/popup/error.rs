//! Errors surfaced by the popup façade.

use thiserror::Error;

/// Errors returned by [`InfoPopup`](super::InfoPopup) operations.
///
/// Every variant is a caller programming error; the popup never recovers
/// from one internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PopupError {
    #[error("Icon alias \"{alias}\" is invalid.")]
    InvalidIconAlias { alias: String },
}
