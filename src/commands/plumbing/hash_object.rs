use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use std::path::Path;

impl Repository {
    /// Hash a workspace file as a blob, storing it when `write` is set
    pub fn hash_object(&self, object_path: &Path, write: bool) -> Result<ObjectId> {
        let object = self.workspace().parse_blob(object_path)?;

        if write {
            self.database().store(&object)
        } else {
            self.database().hash(&object)
        }
    }
}
