use thiserror::Error;

///
/// The errors that can be raised by rope operations
///
/// Positions throughout the rope API are 1-based code point positions. Operations never
/// clamp a bad argument to something usable: an argument outside the rope is reported
/// to the caller at the point of the call. A zero-length request is not an error and is
/// answered with an empty value instead.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum RopeError {
    /// A position or range argument fell outside the rope
    #[error("position {position} is out of range for a rope of length {len}")]
    OutOfRange { position: usize, len: usize },
}

/// The result type returned by fallible rope operations
pub type Result<T> = std::result::Result<T, RopeError>;
