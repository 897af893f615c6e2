use std::sync::atomic::{AtomicBool, Ordering};

use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};

use crate::{Error, Result};

/// Cleared by the SIGINT handler; the relay loops check it once per
/// iteration and never from inside a blocking call.
static RUNNING: AtomicBool = AtomicBool::new(true);

const NOTICE: &[u8] = b"caught SIGINT, stopping\n";

extern "C" fn handle_sigint(_signal: libc::c_int) {
    // the log facade is not async-signal-safe; write(2) is
    unsafe {
        libc::write(
            libc::STDERR_FILENO,
            NOTICE.as_ptr() as *const libc::c_void,
            NOTICE.len(),
        );
    }

    RUNNING.store(false, Ordering::SeqCst);
}

/// Re-arms the running flag and registers the SIGINT handler with
/// SA_RESTART, so blocking reads and writes resume after the signal and
/// the flag is the only shutdown channel.
pub fn install() -> Result<&'static AtomicBool> {
    RUNNING.store(true, Ordering::SeqCst);

    let action = SigAction::new(
        SigHandler::Handler(handle_sigint),
        SaFlags::SA_RESTART,
        SigSet::empty(),
    );

    // SAFETY: the handler only touches the atomic flag and write(2)
    unsafe { signal::sigaction(Signal::SIGINT, &action) }.map_err(|e| Error::Nix {
        msg: "sigaction",
        src: e,
    })?;

    Ok(&RUNNING)
}
