//! Compact string IDs: random, deterministic (SHA-256 of an input) or
//! sequential (base36 millisecond prefix, lexicographically sortable).
//!
//! ```
//! use compactid::{generate_id, GenerateIdOptions};
//!
//! let id = generate_id(&GenerateIdOptions::new().length(12)).unwrap();
//! assert_eq!(id.len(), 12);
//! ```

pub mod alphabet;
pub mod config;
pub mod encode;
pub mod error;
pub mod generate;
mod hash;
pub mod value;

pub use alphabet::{Alphabet, AlphabetKind, BASE36, BASE62, CROCKFORD};
pub use config::{GenerateIdOptions, Mode, ResolvedOptions};
pub use encode::{encode, encode_bytes};
pub use error::{ErrorKind, IdError, Result};
pub use generate::{
    EntropySource, OsEntropy, entropy_bytes, generate_id, generate_id_with, sequential_timestamp,
    timestamp_prefix,
};
pub use value::BigValue;
