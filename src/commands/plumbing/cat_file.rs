use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;

impl Repository {
    pub fn cat_file(&self, object_id: &str) -> Result<String> {
        let object_id = ObjectId::try_parse(object_id)?;
        let object = self.database().load(&object_id)?;

        Ok(object.display())
    }
}
