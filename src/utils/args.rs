//! CLI argument normalization.

use crate::error::{Error, Result};

/// Options parsed from trailing `key=value` positional arguments.
#[derive(Debug, Default, Clone)]
pub struct PositionalOptions {
    pub publisher: Option<String>,
}

/// Parse trailing `key=value` positional arguments.
///
/// The only recognized key is `publisher`; anything else is rejected so a
/// typo never silently drops an option.
pub fn parse_key_value_options(args: &[String]) -> Result<PositionalOptions> {
    let mut options = PositionalOptions::default();

    for arg in args {
        let (key, value) = arg.split_once('=').ok_or_else(|| {
            Error::validation_invalid_argument(
                "options",
                format!("Expected key=value, got '{}'", arg),
                Some(arg.clone()),
            )
            .with_hint("Pass the publisher as: extpack package publisher=<name>")
        })?;

        match key {
            "publisher" => {
                if value.is_empty() {
                    return Err(Error::validation_invalid_argument(
                        "publisher",
                        "Publisher value is empty",
                        Some(arg.clone()),
                    ));
                }
                options.publisher = Some(value.to_string());
            }
            other => {
                return Err(Error::validation_invalid_argument(
                    "options",
                    format!("Unknown option key '{}'", other),
                    Some(arg.clone()),
                )
                .with_hint("The only supported option is publisher=<name>"));
            }
        }
    }

    Ok(options)
}
