//! The object contract every VFS backend offers.
use crate::{msg2err, Error, Offset};

/// Named storage objects with append-only writes.
///
/// Objects are addressed by an opaque URI. The contract is deliberately
/// small: ask for the size, read a range, append at the end, make it
/// durable. Creating and removing objects is backend-specific and
/// happens outside this trait.
///
/// All four operations fail on a missing or inaccessible object.
pub trait Vfs {
    /// Current size of the object in bytes.
    fn size(&self, uri: &str) -> Result<Offset, Error>;

    /// Read into `buf` starting at `offset`. Returning zero means end-of-object.
    fn read_at(&self, uri: &str, offset: Offset, buf: &mut [u8]) -> Result<usize, Error>;

    /// Append the whole buffer at the current end of the object.
    fn append(&self, uri: &str, buf: &[u8]) -> Result<(), Error>;

    /// Make the object durable.
    fn sync(&self, uri: &str) -> Result<(), Error>;
}

/// Extension methods to make callers easier.
pub trait VfsExt {
    /// Fill the buffer completely.
    fn read_exact_at(&self, uri: &str, offset: Offset, buf: &mut [u8]) -> Result<(), Error>;
}

impl VfsExt for &dyn Vfs {
    fn read_exact_at(&self, uri: &str, offset: Offset, buf: &mut [u8]) -> Result<(), Error> {
        let mut n = 0;
        while n != buf.len() {
            match self.read_at(uri, offset + n as Offset, &mut buf[n..])? {
                0 => return Err(msg2err!(PartialReadError)),
                c => n += c,
            }
        }
        Ok(())
    }
}

/// An exact read could only be partially done.
#[derive(Debug, thiserror::Error)]
#[error("partial read")]
pub struct PartialReadError;
