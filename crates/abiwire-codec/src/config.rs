//! Decoder configuration

/// Decoder settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecoderConfig {
    /// Fail the whole call on the first malformed parameter instead of
    /// returning partial results
    #[cfg_attr(feature = "serde", serde(default))]
    pub strict: bool,
    /// Maximum nesting of arrays and tuples
    #[cfg_attr(feature = "serde", serde(default = "default_max_depth"))]
    pub max_depth: usize,
}

/// Default nesting limit
pub const DEFAULT_MAX_DEPTH: usize = 32;

#[cfg(feature = "serde")]
fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecoderConfig {
    /// Strict configuration with the default depth limit
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Set the nesting limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
