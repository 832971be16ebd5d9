use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// An activity as it is exchanged with clients.
///
/// Only the `id` is mandatory when deserializing, all
/// other fields are tolerated to be missing.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Activity {
    pub id          : String,
    #[serde(default)]
    pub title       : String,
    #[serde(default)]
    pub date        : String,
    #[serde(default)]
    pub description : String,
    #[serde(default)]
    pub category    : String,
}

/// Request body for editing an existing activity.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct UpdateActivity {
    pub title       : String,
    pub date        : String,
    #[serde(default)]
    pub description : String,
    pub category    : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error),
    error("{message} (HTTP status {http_status})")
)]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
