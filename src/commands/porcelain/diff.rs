use crate::areas::repository::Repository;
use crate::artifacts::diff::diff_target::DiffTarget;
use crate::errors::Result;

impl Repository {
    /// "New file" diff blocks for every workspace file missing from the index
    pub fn diff_targets(&self) -> Result<Vec<DiffTarget>> {
        let mut index = self.index();
        index.rehydrate()?;

        self.workspace()
            .list_files(None)?
            .into_iter()
            .filter(|file| !index.is_tracked(file))
            .map(|file| {
                let data = self.workspace().read_file(&file)?;
                Ok(DiffTarget::new(file, data.into()))
            })
            .collect()
    }

    pub fn diff(&self) -> Result<String> {
        Ok(self
            .diff_targets()?
            .iter()
            .map(ToString::to_string)
            .collect())
    }
}
