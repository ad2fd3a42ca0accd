use std::result;

/// Error type for all fallible [`crate::Vector`] and [`crate::Builder`]
/// operations.
///
/// An index-taking operation is only ever rejected for being out of range,
/// `pop`/`pop_first` reject an empty receiver, the builder constructor
/// rejects a malformed leaf capacity, and the optional integrity checker
/// reports the first invariant it finds violated. No operation partially
/// mutates its receiver before failing.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// `index` was not within `[0, len)` (or `[0, len]` for insertion/split).
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// `pop`/`pop_first` called on an empty sequence.
    #[error("operation not valid on an empty sequence")]
    EmptySequence,

    /// A builder was constructed with a capacity that is not a positive
    /// multiple of 32 (the trie's branching factor).
    #[error("builder capacity {0} must be a positive multiple of 32")]
    InvalidBuilderCapacity(usize),

    /// The integrity checker found a structural invariant violated; the
    /// string names which invariant and where.
    #[error("integrity violation: {0}")]
    IntegrityViolation(String),
}

/// Result alias used throughout this crate.
pub type Result<T> = result::Result<T, Error>;
