//! Ixa CLI.

use std::io::IsTerminal;

use ixac::{ErrorEmitter, RunConfig};

fn main() {
    ixac::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match RunConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{}", ixac::usage());
            std::process::exit(1);
        }
    };

    match ixac::run(&config) {
        Ok(output) => println!("{output}"),
        Err(failure) => {
            let is_tty = std::io::stderr().is_terminal();
            let mut emitter = ErrorEmitter::stderr(config.color, is_tty);
            emitter.emit(&failure);
            emitter.flush();
            std::process::exit(1);
        }
    }
}
