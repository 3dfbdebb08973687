//! User identity stored in `.git/config.json`
//!
//! The file is created empty by `init` and filled by `lit config`. Commits read
//! it once and receive the value explicitly; nothing is cached on the
//! repository handle.

use crate::errors::{IoContext, LitError, Result};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Config {
    username: String,
    email: String,
}

impl Config {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Read the identity from `path`
    ///
    /// A missing or empty file means no identity was configured yet.
    pub fn load(path: &Path) -> Result<Self> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LitError::ConfigMissing);
            }
            Err(e) => return Err(LitError::io(path, e)),
        };

        if data.trim().is_empty() {
            return Err(LitError::ConfigMissing);
        }

        let config = serde_json::from_str::<Config>(&data)
            .map_err(|e| LitError::format(format!("{}: {e}", path.display())))?;
        if config.username.is_empty() || config.email.is_empty() {
            return Err(LitError::ConfigMissing);
        }

        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| LitError::format(format!("unable to encode config: {e}")))?;

        std::fs::write(path, data).at(path)?;
        tracing::debug!(path = %path.display(), username = %self.username, "saved config");

        Ok(())
    }
}
