use log::info;

use crate::{Error, Result};

use std::fs::File;
use std::os::unix::io::FromRawFd;
use std::path::Path;

use nix::fcntl::{self, OFlag};
use nix::sys::stat;

/// Opens the device node write-only for the transmitter.
pub fn open_write(path: &Path) -> Result<File> {
    info!("opening `{}` for writing", path.display());
    open(path, OFlag::O_WRONLY, "open uart to write")
}

/// Opens the device node read-only for the receiver.
pub fn open_read(path: &Path) -> Result<File> {
    info!("opening `{}` for reading", path.display());
    open(path, OFlag::O_RDONLY, "open uart to read")
}

fn open(path: &Path, flags: OFlag, msg: &'static str) -> Result<File> {
    let fd = fcntl::open(path, flags, stat::Mode::empty())
        .map_err(|e| Error::Nix { msg, src: e })?;

    // safe to create the file given the successful return of open(2);
    // dropping it closes the device on every exit path
    Ok(unsafe { File::from_raw_fd(fd) })
}
