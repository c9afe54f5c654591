use thiserror::Error;

/// Core error type shared across sqlfixture crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A label does not belong to the enum vocabulary it was parsed as.
    #[error("unknown {kind} label: '{label}'")]
    UnknownLabel { kind: &'static str, label: String },
}

/// Convenience alias for results returned by sqlfixture crates.
pub type Result<T> = std::result::Result<T, Error>;
