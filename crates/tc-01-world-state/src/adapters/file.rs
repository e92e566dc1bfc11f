use crate::adapters::cursor::SnapshotCursor;
use crate::domain::{KeyRange, StateEntry, StoreError};
use crate::ports::{StateIterator, WorldState};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// File-backed world state.
///
/// The whole map is held in memory and rewritten to disk on every put, via a
/// temp file and rename so a crash never leaves a half-written file behind.
///
/// On-disk layout, repeated per entry:
///
/// ```text
/// [key_len: u32 LE][key bytes][value_len: u32 LE][value bytes]
/// ```
pub struct FileBackedWorldState {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
    path: PathBuf,
    open_cursors: Arc<AtomicUsize>,
}

impl FileBackedWorldState {
    /// Open the store at `path`, loading any existing entries.
    ///
    /// A missing file is an empty store. An unreadable file is an error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let entries = Self::load_from_file(&path)?;
            info!(path = %path.display(), keys = entries.len(), "Loaded world state");
            entries
        } else {
            info!(path = %path.display(), "No existing world state file, starting empty");
            BTreeMap::new()
        };

        Ok(Self {
            entries: RwLock::new(entries),
            path,
            open_cursors: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of scan cursors not yet closed or dropped.
    pub fn open_cursors(&self) -> usize {
        self.open_cursors.load(Ordering::SeqCst)
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn load_from_file(path: &Path) -> Result<BTreeMap<String, Vec<u8>>, StoreError> {
        let mut bytes = Vec::new();
        std::fs::File::open(path)?.read_to_end(&mut bytes)?;

        let mut entries = BTreeMap::new();
        let mut cursor = 0;

        while cursor < bytes.len() {
            let Some((key, next)) = read_chunk(&bytes, cursor) else {
                warn!(path = %path.display(), offset = cursor, "Truncated key, ignoring tail");
                break;
            };
            let Some((value, next)) = read_chunk(&bytes, next) else {
                warn!(path = %path.display(), offset = next, "Truncated value, ignoring tail");
                break;
            };
            let key = String::from_utf8(key.to_vec()).map_err(|e| StoreError::Io {
                message: format!("non UTF-8 key at offset {cursor}: {e}"),
            })?;
            entries.insert(key, value.to_vec());
            cursor = next;
        }

        Ok(entries)
    }

    fn save_to_file(&self, entries: &BTreeMap<String, Vec<u8>>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut bytes = Vec::new();
        for (key, value) in entries {
            write_chunk(&mut bytes, key.as_bytes())?;
            write_chunk(&mut bytes, value)?;
        }

        let temp_path = temp_path_for(&self.path);
        let mut file = std::fs::File::create(&temp_path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        std::fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}

/// `<file name>.tmp` next to `path`, so stores differing only by extension
/// never share a temp file.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn read_chunk(bytes: &[u8], offset: usize) -> Option<(&[u8], usize)> {
    let len_end = offset.checked_add(4)?;
    let len = u32::from_le_bytes(bytes.get(offset..len_end)?.try_into().ok()?) as usize;
    let end = len_end.checked_add(len)?;
    Some((bytes.get(len_end..end)?, end))
}

fn write_chunk(out: &mut Vec<u8>, chunk: &[u8]) -> Result<(), StoreError> {
    let len = u32::try_from(chunk.len()).map_err(|_| StoreError::Io {
        message: format!("entry of {} bytes exceeds u32 length prefix", chunk.len()),
    })?;
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(chunk);
    Ok(())
}

impl WorldState for FileBackedWorldState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut entries = self.entries.write();
        let previous = entries.insert(key.to_string(), value.to_vec());

        if let Err(err) = self.save_to_file(&entries) {
            // Keep memory consistent with what is on disk
            match previous {
                Some(old) => entries.insert(key.to_string(), old),
                None => entries.remove(key),
            };
            return Err(err);
        }

        debug!(key, bytes = value.len(), "Persisted world state entry");
        Ok(())
    }

    fn get_state_by_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateIterator>, StoreError> {
        let range = KeyRange::new(start, end);
        let snapshot = if range.is_empty() {
            Vec::new()
        } else {
            self.entries
                .read()
                .range::<str, _>(range.bounds())
                .map(|(k, v)| StateEntry::new(k.clone(), v.clone()))
                .collect()
        };

        Ok(Box::new(SnapshotCursor::new(
            snapshot,
            Arc::clone(&self.open_cursors),
        )))
    }
}
