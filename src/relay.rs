use log::info;

use crate::{device, interrupt};
use crate::{Error, Result};

use std::io;
use std::os::unix::io::{AsRawFd, RawFd};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use nix::unistd;

const BUFFER_SIZE: usize = 64;

/// Relays standard input to the device until end of input, an error or
/// SIGINT.
pub fn transmit(path: &Path) -> Result<()> {
    let uart = device::open_write(path)?;
    let running = interrupt::install()?;

    info!("forwarding stdin, end of input finishes the transmitter");
    transmit_loop(io::stdin().as_raw_fd(), uart.as_raw_fd(), running)
}

/// Relays device bytes to standard output until the sender closes the
/// stream, an error or SIGINT.
pub fn receive(path: &Path) -> Result<()> {
    let uart = device::open_read(path)?;
    let running = interrupt::install()?;

    info!("waiting for device data");
    receive_loop(uart.as_raw_fd(), io::stdout().as_raw_fd(), running)
}

pub fn transmit_loop(input: RawFd, device: RawFd, running: &AtomicBool) -> Result<()> {
    let mut buf = [0u8; BUFFER_SIZE];

    while running.load(Ordering::SeqCst) {
        let len = unistd::read(input, &mut buf).map_err(|e| Error::Nix {
            msg: "read stdin",
            src: e,
        })?;

        // ^D, or the input pipe closed
        if len == 0 {
            break;
        }

        if let Err(e) = write_all(|chunk| unistd::write(device, chunk), &buf[..len]) {
            // the device is gone, make no further attempts
            running.store(false, Ordering::SeqCst);
            return Err(Error::Nix {
                msg: "write uart",
                src: e,
            });
        }
    }

    Ok(())
}

pub fn receive_loop(device: RawFd, output: RawFd, running: &AtomicBool) -> Result<()> {
    let mut buf = [0u8; BUFFER_SIZE];

    while running.load(Ordering::SeqCst) {
        let len = unistd::read(device, &mut buf).map_err(|e| Error::Nix {
            msg: "read uart",
            src: e,
        })?;

        // the sender closed its end of the stream
        if len == 0 {
            break;
        }

        // a failed stdout write is not a relay error, keep draining the device
        let _ = write_all(|chunk| unistd::write(output, chunk), &buf[..len]);
    }

    Ok(())
}

/// Calls `write` on the remaining tail of `buf` until the total sent
/// equals the requested length, covering writes that transfer fewer
/// bytes than asked for.
pub fn write_all<W>(mut write: W, buf: &[u8]) -> nix::Result<()>
where
    W: FnMut(&[u8]) -> nix::Result<usize>,
{
    let mut sent = 0;

    while sent < buf.len() {
        sent += write(&buf[sent..])?;
    }

    Ok(())
}
