//! Color primitives for legends and bar fills.

use std::fmt;

/// Color specification as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChartColor {
    /// Direct hex color (e.g., "#1f77b4")
    Hex(String),
    /// CSS color keyword (e.g., "orange")
    Named(String),
}

impl ChartColor {
    /// Create a CSS color keyword.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::Named(name.to_string())
    }

    /// Create a hex color.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> &str {
        match self {
            Self::Hex(value) | Self::Named(value) => value,
        }
    }
}

impl fmt::Display for ChartColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_css())
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
