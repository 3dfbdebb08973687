use crate::areas::repository::{CONFIG_FILE, Repository};
use crate::errors::{IoContext, Result};
use std::fs;

const DEFAULT_CONFIG: &str = "[core]\n\trepositoryformatversion = 0\n\tfilemode = true\n\tbare = false\n\tlogallrefupdates = true\n";

const DEFAULT_DESCRIPTION: &str =
    "Unnamed repository; edit this file 'description' to name the repository.\n";

impl Repository {
    /// Create the metadata layout and return the metadata directory
    ///
    /// Objects, the index and a configured identity survive a second `init`.
    pub fn init(&self) -> Result<String> {
        for dir in [
            self.database().objects_path().to_path_buf(),
            self.refs().heads_path(),
            self.refs().tags_path(),
        ] {
            fs::create_dir_all(&dir).at(&dir)?;
        }

        self.refs().set_head()?;

        let config_path = self.git_path().join("config");
        fs::write(&config_path, DEFAULT_CONFIG).at(&config_path)?;

        let description_path = self.git_path().join("description");
        fs::write(&description_path, DEFAULT_DESCRIPTION).at(&description_path)?;

        let identity_path = self.git_path().join(CONFIG_FILE);
        if !identity_path.exists() {
            fs::write(&identity_path, "").at(&identity_path)?;
        }

        tracing::debug!(path = %self.git_path().display(), "initialized repository");

        Ok(format!(
            "Initialized empty repository: {}",
            self.git_path().display()
        ))
    }
}
