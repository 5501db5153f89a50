//! Error taxonomy for watcher construction and pulses.
//!
//! Every variant is a configuration or contract violation: the engine works
//! on geometry that is already available, so nothing here is transient and
//! nothing is retried. Errors surface synchronously at the call that
//! violated the contract and are never swallowed.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WatchError>;

#[derive(Error, Debug)]
/// A configuration mistake detected at construction or during a pulse.
pub enum WatchError {
    /// The watcher was constructed with an empty section list.
    #[error("no sections given")]
    NoSections,

    /// No scroller was configured and none could be determined from the
    /// sections' positioning ancestors.
    #[error("could not determine scroller of the given sections, please set the scroller option")]
    ScrollerUndetermined,

    /// A resolution mode string did not match any known mode.
    #[error("unknown resolution mode {0:?}, expected \"height\", \"focus-line\" or \"none\"")]
    UnknownResolution(String),

    /// A custom resolver picked a candidate outside the candidate list.
    #[error("custom resolver chose candidate {chosen} of {len}")]
    ResolverOutOfRange {
        /// Index returned by the resolver.
        chosen: usize,
        /// Number of candidates it was given.
        len: usize,
    },

    /// A section measured with zero or negative height.
    #[error("section {index} has zero or negative height")]
    DegenerateSection {
        /// Position of the offending section in the caller-supplied order.
        index: usize,
    },
}
