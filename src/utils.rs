// In: src/utils.rs

//! Small shared helpers: delimited-string building and opt-in logging setup.

use std::sync::Once;

use log::LevelFilter;

use crate::error::BridgeError;

/// Joins a sequence of strings with `,` separators.
///
/// An empty input is a checked `EmptyList` error; there is no sensible
/// zero-item rendering for the contexts this feeds (record keys, partition
/// descriptors).
pub fn join_with_comma<S: AsRef<str>>(items: &[S]) -> Result<String, BridgeError> {
    if items.is_empty() {
        return Err(BridgeError::EmptyList("strings to comma-join"));
    }
    Ok(items
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(","))
}

static INIT_LOGGER: Once = Once::new();

/// Turns on verbose logging for the bridge's conversion decisions.
///
/// Intended for connector debugging sessions. Safe to call more than once;
/// only the first call initializes the logger.
pub fn enable_verbose_logging() {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(LevelFilter::Debug);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        let _ = builder.try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_single_commas() {
        assert_eq!(join_with_comma(&["x", "y", "z"]).unwrap(), "x,y,z");
    }

    #[test]
    fn single_item_has_no_separator() {
        assert_eq!(join_with_comma(&["only"]).unwrap(), "only");
    }

    #[test]
    fn empty_input_is_a_checked_error() {
        let err = join_with_comma::<&str>(&[]).unwrap_err();
        assert!(matches!(err, BridgeError::EmptyList(_)));
    }

    #[test]
    fn enable_verbose_logging_is_idempotent() {
        enable_verbose_logging();
        enable_verbose_logging();
    }
}
