//! Flattening configuration.

use super::casing::Casing;

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: &str = ":";

/// Delimiter for dotted paths, as most log backends expect.
pub const DOT_DELIMITER: &str = ".";

/// Errors raised while building [`FlattenOptions`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("key delimiter must not be empty")]
    EmptyDelimiter,
}

/// How keys are built and leaves rendered.
///
/// ```rust
/// use flatprops::{Casing, FlattenOptions};
///
/// let options = FlattenOptions::new()
///     .with_casing(Casing::LowerCase)
///     .with_redaction(true)
///     .with_delimiter(".")?
///     .with_key_prefix("request");
/// assert_eq!(options.delimiter(), ".");
/// # Ok::<(), flatprops::OptionsError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawOptions"))]
pub struct FlattenOptions {
    casing: Casing,
    redact: bool,
    delimiter: String,
    key_prefix: String,
}

impl FlattenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default options with [`DOT_DELIMITER`] between segments.
    pub fn dotted() -> Self {
        Self {
            delimiter: DOT_DELIMITER.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_casing(mut self, casing: Casing) -> Self {
        self.casing = casing;
        self
    }

    /// Masks sensitive record-field leaves with the redaction marker.
    #[must_use]
    pub fn with_redaction(mut self, redact: bool) -> Self {
        self.redact = redact;
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Result<Self, OptionsError> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(OptionsError::EmptyDelimiter);
        }
        self.delimiter = delimiter;
        Ok(self)
    }

    /// Scopes every emitted key under `prefix`.
    #[must_use]
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    pub fn casing(&self) -> Casing {
        self.casing
    }

    pub fn redact(&self) -> bool {
        self.redact
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            casing: Casing::Unchanged,
            redact: false,
            delimiter: DEFAULT_DELIMITER.to_string(),
            key_prefix: String::new(),
        }
    }
}

/// Unvalidated mirror of [`FlattenOptions`] used for deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawOptions {
    casing: Casing,
    redact: bool,
    delimiter: String,
    key_prefix: String,
}

#[cfg(feature = "serde")]
impl Default for RawOptions {
    fn default() -> Self {
        let FlattenOptions {
            casing,
            redact,
            delimiter,
            key_prefix,
        } = FlattenOptions::default();
        Self {
            casing,
            redact,
            delimiter,
            key_prefix,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawOptions> for FlattenOptions {
    type Error = OptionsError;

    fn try_from(raw: RawOptions) -> Result<Self, Self::Error> {
        FlattenOptions::new()
            .with_casing(raw.casing)
            .with_redaction(raw.redact)
            .with_key_prefix(raw.key_prefix)
            .with_delimiter(raw.delimiter)
    }
}
