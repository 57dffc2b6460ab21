//! In-memory objects.
//!
//! The reference backend: every object is a growable byte vector.
//! Useful for tests and for exercising stream consumers without
//! touching a real store.
#![no_std]
extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use ov_vfs::{msg2err, Error, Offset, Vfs};

/// A VFS keeping each object in memory.
///
/// Methods take `&self` to satisfy the shared-backend contract; the
/// map lives behind a `RefCell`, so a single instance must not be
/// shared across threads.
#[derive(Default)]
pub struct MemoryVfs(RefCell<BTreeMap<String, Vec<u8>>>);

impl MemoryVfs {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty object. Fails if it already exists.
    pub fn create(&self, uri: &str) -> Result<(), Error> {
        let mut objects = self.0.borrow_mut();
        if objects.contains_key(uri) {
            return Err(msg2err!(format!("object exists: {uri}")));
        }
        objects.insert(String::from(uri), Vec::new());
        Ok(())
    }

    /// Cut an object down to `len` bytes if it is longer.
    pub fn truncate(&self, uri: &str, len: usize) -> Result<(), Error> {
        let mut objects = self.0.borrow_mut();
        let data = objects.get_mut(uri).ok_or_else(|| missing(uri))?;
        data.truncate(len);
        Ok(())
    }

    /// Snapshot the contents of an object.
    pub fn contents(&self, uri: &str) -> Option<Vec<u8>> {
        self.0.borrow().get(uri).cloned()
    }
}

fn missing(uri: &str) -> Error {
    msg2err!(format!("no such object: {uri}"))
}

impl Vfs for MemoryVfs {
    fn size(&self, uri: &str) -> Result<Offset, Error> {
        let objects = self.0.borrow();
        let data = objects.get(uri).ok_or_else(|| missing(uri))?;
        Ok(data.len() as Offset)
    }

    fn read_at(&self, uri: &str, offset: Offset, buf: &mut [u8]) -> Result<usize, Error> {
        let objects = self.0.borrow();
        let data = objects.get(uri).ok_or_else(|| missing(uri))?;
        if offset >= data.len() as Offset {
            return Ok(0);
        }
        let offset = offset as usize;
        let n = core::cmp::min(data.len() - offset, buf.len());
        buf[..n].copy_from_slice(&data[offset..offset + n]);
        Ok(n)
    }

    fn append(&self, uri: &str, buf: &[u8]) -> Result<(), Error> {
        let mut objects = self.0.borrow_mut();
        let data = objects.get_mut(uri).ok_or_else(|| missing(uri))?;
        data.extend_from_slice(buf);
        Ok(())
    }

    fn sync(&self, uri: &str) -> Result<(), Error> {
        let objects = self.0.borrow();
        objects.get(uri).map(|_| ()).ok_or_else(|| missing(uri))
    }
}
