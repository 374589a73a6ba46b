use core::fmt;

/// The error type for fallible operations on [`SparseBitmap`](crate::SparseBitmap) and the
/// skip-driven iterator combinators built on top of it.
#[derive(Debug)]
pub enum Error {
    /// `set`/`try_add` was called with a position that would require rewriting a pair other
    /// than the trailing one.
    ///
    /// `sizeinwords` is the bitmap's word count at the time of the call; a valid `position` must
    /// satisfy `position >= sizeinwords * 32 - 32`.
    OutOfOrder { position: u32, sizeinwords: u32 },
    /// A skip-driven `and`/`fastand` aggregate was built from zero iterators.
    EmptyAggregate,
    /// The operation is not implemented by this iterator combinator.
    Unsupported(&'static str),
    /// A byte stream could not be decoded into an [`IntBuffer`](crate::IntBuffer) or
    /// [`SparseBitmap`](crate::SparseBitmap).
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfOrder { position, sizeinwords } => write!(
                f,
                "position {position} is out of order for a bitmap with sizeinwords = {sizeinwords}"
            ),
            Error::EmptyAggregate => {
                write!(f, "cannot aggregate zero skippable iterators")
            }
            Error::Unsupported(what) => write!(f, "unsupported operation: {what}"),
            #[cfg(feature = "std")]
            Error::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}
