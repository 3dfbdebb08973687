use crate::areas::config::Config;
use crate::areas::repository::Repository;
use crate::errors::Result;

impl Repository {
    pub fn set_config(&self, username: &str, email: &str) -> Result<Config> {
        let config = Config::new(username.to_string(), email.to_string());
        config.save(&self.config_path())?;

        Ok(config)
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load(&self.config_path())
    }
}
