//! Output an object to stdout.

use gumdrop::Options;
use ov_vfs::{check, Error};
use ov_vfs_linux::LinuxVfs;
use ov_vfs_stream::ObjectStream;
use std::io::Write;

#[derive(Debug, Options)]
struct CommandOptions {
    /// Print the help message.
    help: bool,

    /// Root directory of the object store.
    #[options(default = ".")]
    root: String,

    /// Buffer size.
    #[options(default = "65536")]
    buffer: usize,

    /// The bytes to skip at the beginning of the object.
    skip: u64,

    /// Maximum number of bytes to output.
    size: Option<u64>,

    /// The object to read.
    object: String,
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let opts = CommandOptions::parse_args_default_or_exit();
    let vfs = LinuxVfs::new(&opts.root);
    let mut stream = ObjectStream::open(&vfs, &opts.object);
    if opts.skip != 0 {
        check!(stream.seek_to(opts.skip));
    }

    let mut buf = vec![0; opts.buffer];
    let mut stdout = std::io::stdout();
    let mut remaining = opts.size.unwrap_or(u64::MAX);
    while remaining != 0 {
        let maxn = core::cmp::min(buf.len() as u64, remaining) as usize;
        match stream.read(&mut buf[..maxn])? {
            0 => break,
            n => {
                stdout.write_all(&buf[..n])?;
                remaining -= n as u64;
            }
        }
    }
    Ok(())
}
