//! Output the last bytes of an object.

use gumdrop::Options;
use ov_vfs::{check, Error, Vfs, VfsExt};
use ov_vfs_linux::LinuxVfs;
use ov_vfs_stream::{ObjectStream, SeekFrom};
use std::io::Write;

#[derive(Debug, Options)]
struct CommandOptions {
    /// Print the help message.
    help: bool,

    /// Root directory of the object store.
    #[options(default = ".")]
    root: String,

    /// Number of bytes from the end.
    #[options(default = "512")]
    bytes: u64,

    /// The object to read.
    object: String,
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let opts = CommandOptions::parse_args_default_or_exit();
    let vfs = LinuxVfs::new(&opts.root);
    let mut stream = ObjectStream::open(&vfs, &opts.object);

    // Clamp so short objects are printed completely.
    let count = core::cmp::min(opts.bytes, check!(stream.available()));
    let start = check!(stream.seek(SeekFrom::End(-(count as i64))));

    let mut buf = vec![0; count as usize];
    let vfs: &dyn Vfs = &vfs;
    vfs.read_exact_at(&opts.object, start, &mut buf)?;
    std::io::stdout().write_all(&buf)?;
    Ok(())
}
