//! A seekable byte stream over a single VFS object.
//!
//! [`ObjectStream`] bridges two access models: stream consumers expect
//! an arbitrary-position cursor, while the VFS only offers size
//! queries, ranged reads and end-of-object appends. Every bounds
//! decision re-queries the object size, so the cursor cannot drift
//! from the backing object even when a cooperating writer grows it
//! between calls.
#![no_std]

use ov_vfs::{Error, Offset, Vfs};

mod error;
pub use error::StreamError;

/// Where a seek offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekFrom {
    /// From the beginning of the object.
    Start(u64),
    /// Relative to the current cursor.
    Current(i64),
    /// Relative to the end of the object.
    End(i64),
}

/// A cursor over one VFS object.
///
/// The VFS connection is only borrowed and may be shared by any number
/// of sessions. A session holds a single logical cursor: seek, read
/// and write are each a query-validate-act sequence spanning up to two
/// VFS calls, so one session must not be driven from multiple threads.
pub struct ObjectStream<'v> {
    vfs: &'v dyn Vfs,
    uri: Option<&'v str>,
    offset: Offset,
}

impl<'v> ObjectStream<'v> {
    /// Create a session without a target object.
    pub fn new(vfs: &'v dyn Vfs) -> Self {
        Self {
            vfs,
            uri: None,
            offset: 0,
        }
    }

    /// Create a session bound to `uri`.
    pub fn open(vfs: &'v dyn Vfs, uri: &'v str) -> Self {
        Self {
            vfs,
            uri: Some(uri),
            offset: 0,
        }
    }

    /// Bind the session to another object and reset the cursor.
    ///
    /// Purely local; no VFS call is made.
    pub fn set_target(&mut self, uri: &'v str) {
        self.uri = Some(uri);
        self.offset = 0;
    }

    /// The currently bound object, if any.
    pub fn target(&self) -> Option<&'v str> {
        self.uri
    }

    /// The current cursor position.
    pub fn position(&self) -> Offset {
        self.offset
    }

    fn uri(&self) -> Result<&'v str, Error> {
        self.uri.ok_or_else(|| Error::msg(StreamError::Unbound))
    }

    /// Move the cursor. Returns the new absolute position.
    ///
    /// The target must stay within `[0, size]` of the current object
    /// size; otherwise the cursor is left untouched and
    /// [`StreamError::InvalidOffset`] is raised.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<Offset, Error> {
        let uri = self.uri()?;
        let size = self.vfs.size(uri)?;
        let target = match pos {
            SeekFrom::Start(ofs) => Some(ofs),
            SeekFrom::Current(delta) => self.offset.checked_add_signed(delta),
            SeekFrom::End(delta) => size.checked_add_signed(delta),
        };
        match target {
            Some(ofs) if ofs <= size => {
                self.offset = ofs;
                Ok(ofs)
            }
            _ => Err(Error::msg(StreamError::InvalidOffset)),
        }
    }

    /// Move the cursor to an absolute position.
    pub fn seek_to(&mut self, pos: Offset) -> Result<Offset, Error> {
        self.seek(SeekFrom::Start(pos))
    }

    /// Bytes readable without moving the cursor.
    ///
    /// Zero if the object shrank below the cursor in the meantime.
    pub fn available(&self) -> Result<Offset, Error> {
        let uri = self.uri()?;
        Ok(self.vfs.size(uri)?.saturating_sub(self.offset))
    }

    /// Read up to `buf.len()` bytes at the cursor.
    ///
    /// Returning zero means end-of-data. That is a normal terminal
    /// condition, not an error. On a backend failure the cursor is
    /// left untouched.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        let uri = self.uri()?;
        let size = self.vfs.size(uri)?;
        let n = core::cmp::min(buf.len() as Offset, size.saturating_sub(self.offset)) as usize;
        if n == 0 {
            return Ok(0);
        }
        let done = self.vfs.read_at(uri, self.offset, &mut buf[..n])?;
        self.offset += done as Offset;
        Ok(done)
    }

    /// Read a single byte. `None` marks end-of-data.
    pub fn read_byte(&mut self) -> Result<Option<u8>, Error> {
        let mut buf = [0u8];
        Ok(match self.read(&mut buf)? {
            0 => None,
            _ => Some(buf[0]),
        })
    }

    /// Append `buf` at the cursor. Returns the bytes written.
    ///
    /// The object is append-only: the cursor must sit at the current
    /// end of the object, otherwise [`StreamError::AppendOnly`] is
    /// raised before any VFS call and nothing is written.
    pub fn write(&mut self, buf: &[u8]) -> Result<usize, Error> {
        let uri = self.uri()?;
        if self.offset != self.vfs.size(uri)? {
            return Err(Error::msg(StreamError::AppendOnly));
        }
        self.vfs.append(uri, buf)?;
        self.offset += buf.len() as Offset;
        Ok(buf.len())
    }

    /// Append a single byte.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), Error> {
        self.write(&[byte])?;
        Ok(())
    }

    /// Make the object durable. The cursor is unaffected.
    pub fn sync(&self) -> Result<(), Error> {
        self.vfs.sync(self.uri()?)
    }
}
