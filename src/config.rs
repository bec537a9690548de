use crate::alphabet::AlphabetKind;
use crate::error::{IdError, Result};

/// Default ID length for random and deterministic IDs.
pub const DEFAULT_LENGTH: usize = 10;

/// Default ID length for sequential IDs.
pub const DEFAULT_SEQUENTIAL_LENGTH: usize = 16;

/// Shortest sequential ID: the 8-char timestamp plus an 8-char random suffix.
pub const MIN_SEQUENTIAL_LENGTH: usize = 16;

/// Options for [`crate::generate_id`].
///
/// Every field is optional; unset fields take their documented defaults at
/// resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateIdOptions {
    pub length: Option<usize>,
    /// Hash input. A non-empty value selects deterministic mode.
    pub input: Option<String>,
    /// Timestamp-prefixed mode. Ignored when `input` is set.
    pub sequential: bool,
    pub alphabet: AlphabetKind,
}

impl GenerateIdOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    #[must_use]
    pub fn input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    #[must_use]
    pub const fn sequential(mut self, sequential: bool) -> Self {
        self.sequential = sequential;
        self
    }

    #[must_use]
    pub const fn alphabet(mut self, alphabet: AlphabetKind) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Resolves these options into a concrete mode and length.
    ///
    /// Mode is chosen first (deterministic, then sequential, then random),
    /// and the length default follows from the mode.
    ///
    /// # Errors
    ///
    /// Returns `SequentialTooShort` if sequential mode is selected with a
    /// length below [`MIN_SEQUENTIAL_LENGTH`].
    pub fn resolve(&self) -> Result<ResolvedOptions> {
        let mode = match self.input.as_deref() {
            Some(input) if !input.is_empty() => Mode::Deterministic {
                input: input.to_string(),
            },
            _ if self.sequential => Mode::Sequential,
            _ => Mode::Random,
        };

        let length = self.length.unwrap_or_else(|| mode.default_length());

        if mode == Mode::Sequential && length < MIN_SEQUENTIAL_LENGTH {
            return Err(IdError::SequentialTooShort {
                length,
                minimum: MIN_SEQUENTIAL_LENGTH,
            });
        }

        Ok(ResolvedOptions {
            mode,
            length,
            alphabet: self.alphabet,
        })
    }
}

/// How an ID is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Secure random bytes.
    Random,
    /// SHA-256 of the input; no randomness.
    Deterministic { input: String },
    /// Base36 millisecond timestamp followed by a random suffix.
    Sequential,
}

impl Mode {
    #[must_use]
    pub const fn default_length(&self) -> usize {
        match self {
            Self::Sequential => DEFAULT_SEQUENTIAL_LENGTH,
            Self::Random | Self::Deterministic { .. } => DEFAULT_LENGTH,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Deterministic { .. } => "deterministic",
            Self::Sequential => "sequential",
        }
    }
}

/// Fully resolved generation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub mode: Mode,
    pub length: usize,
    pub alphabet: AlphabetKind,
}
