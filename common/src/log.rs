//! Status macros shared by every crate.
//!
//! These forward to `tracing` so the binary decides how (and whether) they
//! are rendered. `success!` is an `INFO` event under the [`SUCCESS_TARGET`]
//! target so formatters can tell a completed step apart from plain chatter.

pub const SUCCESS_TARGET: &str = "skyhaul::success";

/// Target used for raw report lines that must be printed without decoration.
pub const PRINT_TARGET: &str = "skyhaul::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}
