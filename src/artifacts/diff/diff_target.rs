use bytes::Bytes;
use derive_new::new;
use std::path::PathBuf;

const NULL_PATH: &str = "/dev/null";
const NEW_FILE_MODE: &str = "100644";

/// A workspace file absent from the index, rendered as a "new file" diff block
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffTarget {
    pub(crate) file: PathBuf,
    pub(crate) data: Bytes,
}

impl DiffTarget {
    pub fn header(&self) -> String {
        let file = self.file.display();

        format!(
            "diff --git a/{file} b/{file}\n\
             new file mode {NEW_FILE_MODE}\n\
             --- {NULL_PATH}\n\
             +++ b/{file}\n"
        )
    }
}

impl std::fmt::Display for DiffTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{}{}",
            self.header(),
            String::from_utf8_lossy(&self.data)
        )
    }
}
