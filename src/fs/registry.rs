//! The session's file registry.
//!
//! An intrusive singly linked list of boxed [`FileRecord`]s, newest first.
//! Insertion always prepends and never deduplicates, so the same name may
//! appear several times; lookups walk from the head and stop at the first
//! match, which is always the most recent insertion.

use intrusive_collections::{SinglyLinkedList, SinglyLinkedListLink, intrusive_adapter};

use crate::config::ContentMode;

/// One file known to the session.
pub struct FileRecord {
    name: String,
    content: Vec<u8>,
    link: SinglyLinkedListLink,
}

impl FileRecord {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
            link: SinglyLinkedListLink::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The last block read or written through this record.
    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

intrusive_adapter!(RecordAdapter = Box<FileRecord>: FileRecord { link => SinglyLinkedListLink });

pub struct FileRegistry {
    files: SinglyLinkedList<RecordAdapter>,
    len: usize,
}

impl FileRegistry {
    pub const fn new() -> Self {
        Self {
            files: SinglyLinkedList::new(RecordAdapter::NEW),
            len: 0,
        }
    }

    /// Prepend a record. Existing records with the same name are kept.
    pub fn insert(&mut self, record: FileRecord) {
        debug!("registry: insert {:?} ({} content bytes)", record.name, record.content.len());
        self.files.push_front(Box::new(record));
        self.len += 1;
    }

    /// First record named `name`, head first.
    pub fn find(&self, name: &str) -> Option<&FileRecord> {
        self.files.iter().find(|record| record.name == name)
    }

    /// Unlink and return the first record named `name`. Later duplicates stay.
    pub fn remove_first(&mut self, name: &str) -> Option<Box<FileRecord>> {
        let mut cursor = self.files.cursor_mut();
        loop {
            let hit = match cursor.peek_next().get() {
                Some(record) => record.name == name,
                None => return None,
            };
            if hit {
                self.len -= 1;
                debug!("registry: remove {:?}", name);
                return cursor.remove_next();
            }
            cursor.move_next();
        }
    }

    /// Records from head (newest) to tail (oldest).
    pub fn iter(&self) -> impl Iterator<Item = &FileRecord> + '_ {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Default for FileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold one line into a record's content buffer.
///
/// `block_len` is the buffer size minus the terminator slot. In
/// [`ContentMode::LastLine`] a line longer than one block is consumed in
/// `block_len` chunks and only the final chunk remains. In
/// [`ContentMode::Full`] lines accumulate until the buffer is full.
pub fn retain_block(content: &mut Vec<u8>, line: &[u8], mode: ContentMode, block_len: usize) {
    match mode {
        ContentMode::LastLine => {
            let start = if line.is_empty() {
                0
            } else {
                (line.len() - 1) / block_len * block_len
            };
            content.clear();
            content.extend_from_slice(&line[start..]);
        }
        ContentMode::Full => {
            let room = block_len.saturating_sub(content.len());
            if line.len() > room {
                debug!("record content capped at {} bytes", block_len);
            }
            content.extend_from_slice(&line[..line.len().min(room)]);
        }
    }
}
