//! Parsing of the `[General]` section into a [`Config`].

use ini::{Ini, ParseOption};
use std::path::Path;

use super::{Config, ConfigKey, GENERAL_SECTION};
use crate::core::LxpkgError;

/// Parses configuration text, merging the `[General]` values over the defaults.
///
/// The text is INI: `[Section]` headers followed by `key=value` lines, with
/// `;` or `#` comments. This is the format the lxpkg backend writes to
/// `/etc/lxpkg.conf`. Values may optionally be wrapped in double quotes.
/// Backslashes are kept literally.
///
/// `origin` is only used in error messages and logs.
///
/// Individual keys are forgiving: unknown keys and empty values log a
/// warning and keep their default. Only text that cannot be read as INI at
/// all fails the whole file.
///
/// # Errors
///
/// Returns [`LxpkgError::ConfigMalformed`] when the text cannot be parsed as
/// key/value sections.
///
/// ```rust
/// use lxpkg_cli::config::{parse_config_str, ConfigKey};
/// use std::path::Path;
///
/// let config = parse_config_str("[General]\nmax_jobs=8\n", Path::new("inline")).unwrap();
/// assert_eq!(config.get(ConfigKey::MaxJobs), "8");
/// assert_eq!(config.get(ConfigKey::DbPath), "/var/db/lxpkg");
/// ```
pub fn parse_config_str(content: &str, origin: &Path) -> Result<Config, LxpkgError> {
    let options = ParseOption {
        enabled_escape: false,
        ..ParseOption::default()
    };

    let document = Ini::load_from_str_opt(content, options).map_err(|e| {
        LxpkgError::ConfigMalformed {
            path: origin.display().to_string(),
            reason: e.to_string(),
        }
    })?;

    if document.section(None::<String>).is_some_and(|general| !general.is_empty()) {
        tracing::warn!(
            target: "config",
            "Ignoring keys outside of [{GENERAL_SECTION}] in {}",
            origin.display()
        );
    }

    let Some(section) = document.section(Some(GENERAL_SECTION)) else {
        tracing::debug!(
            target: "config",
            "{} has no [{GENERAL_SECTION}] section, using defaults",
            origin.display()
        );
        return Ok(Config::default());
    };

    let mut overrides = Vec::with_capacity(section.len());
    for (name, value) in section.iter() {
        let Some(key) = ConfigKey::from_name(&name.to_ascii_lowercase()) else {
            tracing::warn!(
                target: "config",
                "Ignoring unknown key '{name}' in {}",
                origin.display()
            );
            continue;
        };

        let value = value.trim();
        if value.is_empty() {
            tracing::warn!(
                target: "config",
                "Empty value for '{key}' in {}, using default '{}'",
                origin.display(),
                key.default_value()
            );
            continue;
        }
        overrides.push((key, value.to_string()));
    }

    Ok(Config::with_overrides(overrides))
}
