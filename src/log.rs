//! Logging for scope lifecycle events.
//!
//! Documents and groups report opening and closing at debug level, and
//! footer or closing-tag failures during drop at warn level, since drop has
//! no caller to return them to. With the `tracing` feature these are the
//! `tracing` macros; without it they compile to nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
