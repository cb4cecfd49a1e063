//! Global subscriber installation

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Which subscriber `init` installs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable lines on stderr
    Development,
    /// One JSON object per event on stderr
    Production,
    /// Bare registry; tests install a capture layer via `init_test_capture()`
    Test,
}

impl Profile {
    /// Filter applied when `RUST_LOG` is unset
    pub fn default_directive(self) -> &'static str {
        match self {
            Profile::Development => "peoplex=debug",
            Profile::Production | Profile::Test => "peoplex=info",
        }
    }
}

static INIT: Once = Once::new();

/// Install the global subscriber for `profile`
///
/// Only the first call has an effect. Logs never go to stdout, which is
/// reserved for command output.
pub fn init(profile: Profile) {
    INIT.call_once(|| {
        if profile == Profile::Test {
            tracing_subscriber::registry().init();
            return;
        }

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()));
        let builder = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter);

        if profile == Profile::Production {
            builder.json().init();
        } else {
            builder.init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        for _ in 0..3 {
            init(Profile::Test);
        }
    }

    #[test]
    fn test_development_is_more_verbose() {
        assert_eq!(Profile::Development.default_directive(), "peoplex=debug");
        assert_eq!(Profile::Production.default_directive(), "peoplex=info");
    }
}
