/// Broad classification of an [`IdError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied an argument outside the accepted domain.
    InvalidArgument,
    /// The secure random byte source failed to produce bytes.
    Entropy,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("sequential ID length must be at least {minimum} to make room for timestamp, got {length}")]
    SequentialTooShort { length: usize, minimum: usize },

    #[error("cannot encode negative value: {value}")]
    NegativeValue { value: String },

    #[error("invalid number: '{input}'")]
    InvalidNumber { input: String },

    #[error("invalid alphabet: {reason}")]
    InvalidAlphabet { reason: String },

    #[error("unknown alphabet '{name}': expected 'base62' or 'crockford'")]
    UnknownAlphabet { name: String },

    #[error("entropy source failed: {reason}")]
    Entropy { reason: String },
}

impl IdError {
    /// Returns the error kind this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::SequentialTooShort { .. }
            | Self::NegativeValue { .. }
            | Self::InvalidNumber { .. }
            | Self::InvalidAlphabet { .. }
            | Self::UnknownAlphabet { .. } => ErrorKind::InvalidArgument,
            Self::Entropy { .. } => ErrorKind::Entropy,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::InvalidArgument`.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}

pub type Result<T> = std::result::Result<T, IdError>;
