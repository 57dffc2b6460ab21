//! Append bytes to an object.
//!
//! Reads from stdin unless `--data` is given. A fresh stream starts at
//! offset zero, so the cursor is moved to the end of the object first;
//! anything else the store would reject as an overwrite.

use gumdrop::Options;
use ov_vfs::{check, Error};
use ov_vfs_linux::LinuxVfs;
use ov_vfs_stream::{ObjectStream, SeekFrom};
use std::io::Read;

#[derive(Debug, Options)]
struct CommandOptions {
    /// Print the help message.
    help: bool,

    /// Root directory of the object store.
    #[options(default = ".")]
    root: String,

    /// Create the object first.
    create: bool,

    /// Sync the object after writing.
    sync: bool,

    /// Text to append instead of stdin.
    data: Option<String>,

    /// The object to append to.
    object: String,
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let opts = CommandOptions::parse_args_default_or_exit();
    let vfs = LinuxVfs::new(&opts.root);
    if opts.create {
        vfs.create(&opts.object)?;
    }

    let mut stream = ObjectStream::open(&vfs, &opts.object);
    check!(stream.seek(SeekFrom::End(0)));
    let written = match &opts.data {
        Some(text) => stream.write(text.as_bytes())?,
        None => {
            let mut data = Vec::new();
            std::io::stdin().read_to_end(&mut data)?;
            stream.write(&data)?
        }
    };
    if opts.sync {
        stream.sync()?;
    }
    println!("{written}");
    Ok(())
}
