//! Engine error taxonomy.
//!
//! Everything here is a programming/usage error surfaced synchronously to
//! the caller; the engine performs no I/O of its own, so there are no
//! transient failure modes to retry. Loading an optional texts profile is
//! the one place the host can hand us a path, and the two wrapper variants
//! keep read and parse failures distinguishable.

use crate::domain::PatternKind;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
  /// The requested pattern kind is declared but has no generator wired in.
  /// Fatal to the call; deliberately not a silent no-op so callers can tell
  /// "unsupported" apart from a generation failure.
  #[error("pattern type '{0}' is not implemented yet")]
  UnsupportedPatternType(PatternKind),

  #[error("failed to read engine profile at {path}: {source}")]
  ProfileRead {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse engine profile at {path}: {source}")]
  ProfileParse {
    path: String,
    #[source]
    source: toml::de::Error,
  },
}
