//! Linux specific VFS backend.
//!
//! Objects live as plain files below a root directory. The URI is the
//! path relative to that root; it must not leave it.

use ov_vfs::{msg2err, Error, Offset, Vfs};
use std::fs::File;
use std::io::Write;
use std::os::fd::AsRawFd;
use std::path::{Component, Path, PathBuf};

/// A VFS backed by a directory tree.
pub struct LinuxVfs {
    root: PathBuf,
}

impl LinuxVfs {
    /// Use `root` as the home of all objects.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Create an empty object, including missing parent directories.
    ///
    /// Fails if the object already exists.
    pub fn create(&self, uri: &str) -> Result<(), Error> {
        let path = self.path(uri)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        File::options().write(true).create_new(true).open(&path)?;
        log::debug!("created {}", path.display());
        Ok(())
    }

    /// Map an URI to a path below the root.
    fn path(&self, uri: &str) -> Result<PathBuf, Error> {
        let valid = !uri.is_empty()
            && Path::new(uri)
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !valid {
            return Err(msg2err!(format!("invalid object uri: {uri:?}")));
        }
        Ok(self.root.join(uri))
    }
}

impl Vfs for LinuxVfs {
    fn size(&self, uri: &str) -> Result<Offset, Error> {
        Ok(std::fs::metadata(self.path(uri)?)?.len())
    }

    fn read_at(&self, uri: &str, offset: Offset, buf: &mut [u8]) -> Result<usize, Error> {
        let file = File::open(self.path(uri)?)?;
        let res = unsafe {
            libc::pread(
                file.as_raw_fd(),
                buf.as_mut_ptr() as *mut libc::c_void,
                buf.len(),
                offset as i64,
            )
        };
        if res == -1 {
            return Err(std::io::Error::last_os_error().into());
        }
        Ok(res as usize)
    }

    fn append(&self, uri: &str, buf: &[u8]) -> Result<(), Error> {
        let mut file = File::options().append(true).open(self.path(uri)?)?;
        file.write_all(buf)?;
        log::debug!("appended {} bytes to {uri}", buf.len());
        Ok(())
    }

    fn sync(&self, uri: &str) -> Result<(), Error> {
        File::open(self.path(uri)?)?.sync_all()?;
        log::debug!("synced {uri}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_append_read() {
        let dir = tempfile::tempdir().unwrap();
        let vfs = LinuxVfs::new(dir.path());
        vfs.create("logs/a.bin").unwrap();
        assert_eq!(vfs.size("logs/a.bin").unwrap(), 0);
        vfs.append("logs/a.bin", b"hello").unwrap();
        assert_eq!(vfs.size("logs/a.bin").unwrap(), 5);
        let mut buf = [0u8; 3];
        assert_eq!(vfs.read_at("logs/a.bin", 2, &mut buf).unwrap(), 3);
        assert_eq!(&buf, b"llo");
        vfs.sync("logs/a.bin").unwrap();
    }

    #[test]
    fn read_past_the_end_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let vfs = LinuxVfs::new(dir.path());
        vfs.create("a").unwrap();
        vfs.append("a", b"xy").unwrap();
        let mut buf = [0u8; 4];
        assert_eq!(vfs.read_at("a", 2, &mut buf).unwrap(), 0);
        assert_eq!(vfs.read_at("a", 100, &mut buf).unwrap(), 0);
    }

    #[test]
    fn rejects_escaping_uris() {
        let dir = tempfile::tempdir().unwrap();
        let vfs = LinuxVfs::new(dir.path());
        for uri in ["", "/etc/passwd", "../up", "a/../../b", "./a"] {
            assert!(vfs.create(uri).is_err(), "{uri}");
        }
    }

    #[test]
    fn operations_need_an_existing_object() {
        let dir = tempfile::tempdir().unwrap();
        let vfs = LinuxVfs::new(dir.path());
        assert!(vfs.size("missing").is_err());
        assert!(vfs.append("missing", b"x").is_err());
        assert!(vfs.sync("missing").is_err());
    }

    #[test]
    fn create_twice_fails() {
        let dir = tempfile::tempdir().unwrap();
        let vfs = LinuxVfs::new(dir.path());
        vfs.create("a").unwrap();
        assert!(vfs.create("a").is_err());
    }
}
