pub mod device;
pub mod interrupt;
pub mod relay;

mod error;

pub use error::{Error, Result};

use std::path::Path;

/// Device node used when no `--device` argument is given.
pub const DEFAULT_DEVICE: &str = "/dev/ttyAMA0";

/// The two relay directions, selected once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Forward standard input to the device.
    Transmit,

    /// Forward device bytes to standard output.
    Receive,
}

impl Mode {
    /// Selects a mode from the first character of the argument,
    /// case-insensitively: 'w' transmits, 'r' receives.
    pub fn from_arg(arg: &str) -> Option<Mode> {
        match arg.chars().next() {
            Some('w') | Some('W') => Some(Mode::Transmit),
            Some('r') | Some('R') => Some(Mode::Receive),
            _ => None,
        }
    }
}

pub struct RunArgs<'a> {
    pub mode: Mode,
    pub device: &'a Path,
}

pub fn run(args: &RunArgs) -> Result<i32> {
    match args.mode {
        Mode::Transmit => relay::transmit(args.device)?,
        Mode::Receive => relay::receive(args.device)?,
    }

    Ok(exitcode::OK)
}

#[cfg(test)]
mod tests {
    use super::Mode;

    #[test]
    fn w_and_r_prefixes_select_a_mode() {
        assert_eq!(Mode::from_arg("w"), Some(Mode::Transmit));
        assert_eq!(Mode::from_arg("W"), Some(Mode::Transmit));
        assert_eq!(Mode::from_arg("write"), Some(Mode::Transmit));
        assert_eq!(Mode::from_arg("r"), Some(Mode::Receive));
        assert_eq!(Mode::from_arg("R"), Some(Mode::Receive));
        assert_eq!(Mode::from_arg("Read"), Some(Mode::Receive));
    }

    #[test]
    fn anything_else_is_rejected() {
        assert_eq!(Mode::from_arg("x"), None);
        assert_eq!(Mode::from_arg(""), None);
        assert_eq!(Mode::from_arg("1w"), None);
    }
}
