//! Object database (content store)
//!
//! Objects are zlib-compressed and written once to
//! `objects/<first 2 hex chars>/<remaining 38 hex chars>`. Since the path is
//! derived from the content hash, storing the same object twice is a no-op.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{IoContext, LitError, Result};
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Read, Write};
use std::path::Path;
use walkdir::WalkDir;

/// Prefix of the scratch files used while writing an object
const TEMP_PREFIX: &str = "tmp-obj-";

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Compute the id `object` would be stored under, without writing it
    pub fn hash(&self, object: &impl Object) -> Result<ObjectId> {
        object.object_id()
    }

    /// Persist `object` and return its id
    ///
    /// The shard directory is created on demand. An object that already exists
    /// is left untouched.
    pub fn store(&self, object: &impl Object) -> Result<ObjectId> {
        let object_id = object.object_id()?;
        if self.contains(&object_id) {
            tracing::trace!(oid = %object_id, "object already stored");
            return Ok(object_id);
        }

        let object_path = self.path.join(object_id.to_path());

        let object_dir = object_path
            .parent()
            .ok_or_else(|| LitError::format(format!("invalid object path {}", object_path.display())))?;
        std::fs::create_dir_all(object_dir).at(object_dir)?;

        self.write_object(&object_path, object.serialize())?;
        tracing::debug!(oid = %object_id, kind = %object.object_type(), "stored object");

        Ok(object_id)
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    /// Read and decode the object stored under `object_id`
    pub fn load(&self, object_id: &ObjectId) -> Result<ObjectBox> {
        self.parse_object(&self.path.join(object_id.to_path()))
    }

    /// Lazily enumerate every stored object
    ///
    /// Shards and objects are visited in file-name order, so two walks over an
    /// unchanged store yield the same sequence. Each call starts a fresh walk.
    /// A store that was never created holds no objects.
    pub fn objects(&self) -> impl Iterator<Item = Result<(ObjectId, ObjectBox)>> + '_ {
        let walker = self.path.is_dir().then(|| {
            WalkDir::new(&self.path)
                .min_depth(2)
                .max_depth(2)
                .sort_by_file_name()
        });

        walker
            .into_iter()
            .flatten()
            .filter_map(|entry| match entry {
                Ok(entry) if entry.file_type().is_file() => Some(Ok(entry.into_path())),
                Ok(_) => None,
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                    Some(Err(match e.into_io_error() {
                        Some(source) => LitError::io(path, source),
                        None => LitError::format(format!(
                            "filesystem loop under {}",
                            path.display()
                        )),
                    }))
                }
            })
            .filter(|path| {
                !matches!(path, Ok(path) if Self::is_temp_file(path))
            })
            .map(|path| {
                let path = path?;
                let object_id = ObjectId::try_from_path(&path)?;
                let object = self.parse_object(&path)?;
                Ok((object_id, object))
            })
    }

    fn is_temp_file(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(TEMP_PREFIX))
    }

    fn parse_object(&self, object_path: &Path) -> Result<ObjectBox> {
        let object_content = self.read_object(object_path)?;
        let body_size = object_content.len();
        let mut object_reader = Cursor::new(object_content);

        let (object_type, size) = ObjectType::parse_header(&mut object_reader)?;
        if body_size - object_reader.position() as usize != size {
            return Err(LitError::format(format!(
                "object {} declares {} bytes but holds {}",
                object_path.display(),
                size,
                body_size - object_reader.position() as usize
            )));
        }

        match object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Box::new(Blob::deserialize(object_reader)?))),
            ObjectType::Commit => Ok(ObjectBox::Commit(Box::new(Commit::deserialize(
                object_reader,
            )?))),
        }
    }

    fn read_object(&self, object_path: &Path) -> Result<Bytes> {
        let object_content =
            std::fs::read(object_path).map_err(|e| LitError::from_read(object_path, e))?;

        Self::decompress(object_content.into())
    }

    fn write_object(&self, object_path: &Path, object_content: Bytes) -> Result<()> {
        let object_dir = object_path
            .parent()
            .ok_or_else(|| LitError::format(format!("invalid object path {}", object_path.display())))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .at(&temp_object_path)?;

        file.write_all(&object_content).at(&temp_object_path)?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, object_path).at(object_path)?;

        Ok(())
    }

    fn compress(data: Bytes) -> Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .map_err(|e| LitError::format(format!("unable to compress object: {e}")))?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .map_err(|e| LitError::format(format!("unable to compress object: {e}")))
    }

    fn decompress(data: Bytes) -> Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .map_err(|e| LitError::format(format!("unable to decompress object: {e}")))?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("{TEMP_PREFIX}{}", rand::random::<u32>())
    }
}
