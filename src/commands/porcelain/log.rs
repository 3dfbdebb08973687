use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::errors::Result;

impl Repository {
    /// Every commit block, in object store order
    pub fn logs(&self) -> Result<String> {
        RevList::new(self.database()).render()
    }
}
