//! Decoding configuration.

use serde::{Deserialize, Serialize};

/// How decoding treats object keys an entity does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownProperties {
    /// Skip them, logging each at debug level.
    #[default]
    Ignore,
    /// Fail with `Error::UnknownProperty`.
    Reject,
}

/// Document-wide decoding settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DecodeOptions {
    pub unknown_properties: UnknownProperties,
}

impl DecodeOptions {
    /// Options that reject undeclared properties.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            unknown_properties: UnknownProperties::Reject,
        }
    }
}
