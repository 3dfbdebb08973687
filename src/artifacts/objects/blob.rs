//! Blob object
//!
//! Blobs store file content. They carry only the raw bytes, never the file name.
//!
//! ## Format
//!
//! On disk: `blob <size>\0<content>`

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{LitError, Result};
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Read};

/// File content as staged or hashed from the workspace
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Packable for Blob {
    fn serialize(&self) -> Bytes {
        frame(self.object_type(), &self.content)
    }
}

impl Unpackable for Blob {
    fn deserialize(mut reader: impl BufRead) -> Result<Self> {
        // the header has already been read
        let mut content = Vec::new();
        Read::read_to_end(&mut reader, &mut content)
            .map_err(|e| LitError::format(format!("unreadable blob body: {e}")))?;

        Ok(Self::new(content.into()))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn display(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}
