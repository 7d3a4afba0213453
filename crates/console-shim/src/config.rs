//! Shim configuration

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::JAVASCRIPT_SOURCE;

/// Configuration for the installed console shim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShimConfig {
    /// Source tag passed alongside every forwarded message
    pub source: Cow<'static, str>,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            source: Cow::Borrowed(JAVASCRIPT_SOURCE),
        }
    }
}

impl ShimConfig {
    /// Create a new config builder
    #[must_use]
    pub fn builder() -> ShimConfigBuilder {
        ShimConfigBuilder::default()
    }
}

/// Builder for [`ShimConfig`]
#[derive(Debug, Default)]
pub struct ShimConfigBuilder {
    config: ShimConfig,
}

impl ShimConfigBuilder {
    /// Set the source tag
    #[must_use]
    pub fn source(mut self, source: impl Into<Cow<'static, str>>) -> Self {
        self.config.source = source.into();
        self
    }

    /// Build the config
    #[must_use]
    pub fn build(self) -> ShimConfig {
        self.config
    }
}
