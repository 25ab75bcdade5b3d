//! Logging support.
//!
//! When the `tracing` feature is enabled, graph mutations and traversals emit
//! `tracing` events and spans, and [`init_tracing`] installs a stderr
//! subscriber.  When it's disabled, the same macros expand to nothing and
//! [`init_tracing`] is a no-op.

/// Verbosity of the subscriber installed by [`init_tracing`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Maps a count of `-v` flags to a level, starting from [`LogLevel::Warn`].
    pub fn from_verbosity(count: u8) -> Self {
        match count {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    use tracing::Level;

    use super::LogLevel;

    impl From<LogLevel> for Level {
        fn from(level: LogLevel) -> Self {
            match level {
                LogLevel::Error => Level::ERROR,
                LogLevel::Warn => Level::WARN,
                LogLevel::Info => Level::INFO,
                LogLevel::Debug => Level::DEBUG,
                LogLevel::Trace => Level::TRACE,
            }
        }
    }

    /// Installs a global subscriber writing to stderr.  Only the first call
    /// has any effect.
    pub fn init_tracing(level: LogLevel) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(Level::from(level))
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
        });
    }

    pub(crate) use tracing::{debug, info_span, trace};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use super::LogLevel;

    pub fn init_tracing(_level: LogLevel) {
        // No-op when tracing is disabled
    }

    macro_rules! debug {
        ($($args:tt)*) => {{}};
    }

    macro_rules! trace {
        ($($args:tt)*) => {{}};
    }

    macro_rules! info_span {
        ($($args:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    pub(crate) use debug;
    pub(crate) use info_span;
    pub(crate) use trace;

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::init_tracing;
#[cfg(feature = "tracing")]
pub(crate) use enabled::{debug, info_span, trace};

#[cfg(not(feature = "tracing"))]
pub use disabled::{NoOpSpan, NoOpSpanGuard, init_tracing};
#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{debug, info_span, trace};
