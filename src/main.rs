use log::error;

use uart_relay::{run, Mode, RunArgs, DEFAULT_DEVICE};

use std::path::Path;

use clap::{Arg, Command};

fn usage() {
    println!("usage: uart-relay <mode> [--device <path>]");
    println!("  <mode>: W|w sends stdin to the device, R|r prints the device to stdout");
}

fn main() {
    // process arguments
    let matches = Command::new("uart-relay")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manually exercise a serial link from the terminal.")
        .arg(
            Arg::new("mode")
                .index(1)
                .help("W|w to transmit standard input, R|r to receive to standard output"),
        )
        .arg(
            Arg::new("device")
                .long("device")
                .short('d')
                .help("Path of the serial device node.")
                .takes_value(true)
                .default_value(DEFAULT_DEVICE),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Use verbose logging.")
                .takes_value(false),
        )
        .get_matches();

    // setup logging
    let env = env_logger::Env::new().filter_or(
        "LOG",
        if matches.is_present("verbose") {
            "debug"
        } else {
            "info"
        },
    );
    env_logger::init_from_env(env);

    // select the mode before touching the device
    let mode = match matches.value_of("mode").and_then(Mode::from_arg) {
        Some(mode) => mode,
        None => {
            usage();
            std::process::exit(exitcode::USAGE);
        }
    };

    let args = RunArgs {
        mode,
        device: Path::new(matches.value_of("device").expect("device has a default")),
    };

    // relay until the stream ends or the user interrupts
    let code = match run(&args) {
        Ok(code) => code,
        Err(e) => {
            error!("error: {}", e);
            1
        }
    };

    std::process::exit(code);
}
