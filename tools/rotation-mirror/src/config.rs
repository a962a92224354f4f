//! Mirror configuration
//!
//! Every value has a compiled-in default matching the layout of the
//! embedded rotation source, so a config file is optional. A file can
//! override any subset of fields:
//!
//! ```toml
//! [markers]
//! function = "fn rotate"
//! assignment = "new_cube.set_at"
//!
//! [header]
//! offset = 15
//! suffix = "_r"
//!
//! [swap]
//! left = 24
//! right = 42
//! stride = 3
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::error::MirrorError;

/// Complete mirror configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MirrorConfig {
    #[serde(default)]
    pub markers: Markers,
    #[serde(default)]
    pub header: HeaderRename,
    #[serde(default)]
    pub swap: SwapColumns,
}

/// Substrings used to classify lines
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Markers {
    /// Marks a rotation function header.
    pub function: String,
    /// Marks a facelet assignment statement.
    pub assignment: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            function: "fn rotate".to_string(),
            assignment: "new_cube.set_at".to_string(),
        }
    }
}

/// Where and what to insert into a function header
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderRename {
    /// Character offset the suffix is inserted at.
    pub offset: usize,
    pub suffix: String,
}

impl Default for HeaderRename {
    fn default() -> Self {
        Self {
            offset: 15,
            suffix: "_r".to_string(),
        }
    }
}

/// Column pairs exchanged on assignment lines.
///
/// `left` swaps with `right`, and `left + stride` with `right + stride`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwapColumns {
    pub left: usize,
    pub right: usize,
    pub stride: usize,
}

impl Default for SwapColumns {
    fn default() -> Self {
        Self {
            left: 24,
            right: 42,
            stride: 3,
        }
    }
}

impl SwapColumns {
    /// Minimum line length, in characters, needed to perform the swap.
    ///
    /// Holds for either column order, validated or not.
    pub fn required_len(&self) -> usize {
        self.left.max(self.right) + self.stride + 1
    }
}

impl MirrorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Parse and validate configuration from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field combinations that serde cannot express
    pub fn validate(&self) -> Result<(), MirrorError> {
        if self.markers.function.is_empty() || self.markers.assignment.is_empty() {
            return Err(MirrorError::InvalidConfig(
                "markers must not be empty".to_string(),
            ));
        }
        if self.markers.function == self.markers.assignment {
            return Err(MirrorError::InvalidConfig(
                "function and assignment markers must differ".to_string(),
            ));
        }
        if self.header.suffix.is_empty() {
            return Err(MirrorError::InvalidConfig(
                "header suffix must not be empty".to_string(),
            ));
        }
        if self.swap.stride == 0 {
            return Err(MirrorError::InvalidConfig(
                "swap stride must be at least 1".to_string(),
            ));
        }
        if self.swap.left + self.swap.stride >= self.swap.right {
            return Err(MirrorError::InvalidConfig(format!(
                "swap columns overlap: left {} + stride {} must be below right {}",
                self.swap.left, self.swap.stride, self.swap.right
            )));
        }
        Ok(())
    }
}
