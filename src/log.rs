//! Conditional logging macros.
//!
//! With the `tracing` feature these re-export the `tracing` macros; without
//! it they expand to nothing, so the conversion pipeline carries no logging
//! cost by default.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __svg2canvas_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __svg2canvas_trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __svg2canvas_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{
    __svg2canvas_debug as debug, __svg2canvas_trace as trace, __svg2canvas_warn as warn,
};
