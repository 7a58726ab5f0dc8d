//! Binary snapshot of a compiled dictionary (HADX format).
//!
//! Layout: 4 magic bytes, 1 version byte, bincode body. The body is a
//! key-sorted pair list, so identical dictionaries serialize to identical
//! bytes regardless of build order.

use std::fs::{self, File};
use std::path::Path;
use std::time::SystemTime;

use memmap2::Mmap;
use tracing::{debug, warn};

use super::{AccentDictionary, DictError, Pronunciation};

pub(crate) const MAGIC: &[u8; 4] = b"HADX";
pub(crate) const VERSION: u8 = 1;

impl AccentDictionary {
    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let mut records: Vec<(&String, &Vec<Pronunciation>)> = self.entries.iter().collect();
        records.sort_unstable_by(|a, b| a.0.cmp(b.0));
        let body = bincode::serialize(&records).map_err(DictError::Serialize)?;
        let mut buf = Vec::with_capacity(5 + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DictError> {
        if bytes.len() < 5 {
            return Err(DictError::InvalidHeader);
        }
        if &bytes[..4] != MAGIC {
            return Err(DictError::InvalidMagic);
        }
        if bytes[4] != VERSION {
            return Err(DictError::UnsupportedVersion(bytes[4]));
        }
        let records: Vec<(String, Vec<Pronunciation>)> =
            bincode::deserialize(&bytes[5..]).map_err(DictError::Deserialize)?;
        Ok(Self {
            entries: records.into_iter().collect(),
        })
    }

    /// Open a snapshot file via mmap and decode it.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let file = File::open(path)?;
        // SAFETY: The file is opened read-only and the mapping is immutable.
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap)
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        let bytes = self.to_bytes()?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Load the snapshot if current, otherwise (re)compile the raw dump.
    ///
    /// The snapshot is stale when the raw dump is newer. A snapshot that
    /// fails to open while the raw dump exists triggers a rebuild; a failed
    /// snapshot write degrades to an unsaved dictionary with a warning.
    pub fn load_or_compile(raw: &Path, snapshot: &Path) -> Result<Self, DictError> {
        match (modified(raw), modified(snapshot)) {
            (None, None) => Err(DictError::MissingDatabase {
                raw: raw.to_path_buf(),
                snapshot: snapshot.to_path_buf(),
            }),
            (None, Some(_)) => {
                debug!(path = %snapshot.display(), "raw dump absent, loading snapshot");
                Self::open(snapshot)
            }
            (Some(_), None) => Self::compile_and_save(raw, snapshot),
            (Some(raw_mtime), Some(snap_mtime)) => {
                if raw_mtime > snap_mtime {
                    debug!("snapshot stale, recompiling");
                    Self::compile_and_save(raw, snapshot)
                } else {
                    Self::open(snapshot).or_else(|e| {
                        warn!(error = %e, "snapshot unreadable, recompiling");
                        Self::compile_and_save(raw, snapshot)
                    })
                }
            }
        }
    }

    fn compile_and_save(raw: &Path, snapshot: &Path) -> Result<Self, DictError> {
        let dict = Self::compile_file(raw)?;
        if let Err(e) = dict.save(snapshot) {
            warn!(error = %e, path = %snapshot.display(), "failed to write snapshot");
        }
        Ok(dict)
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}
