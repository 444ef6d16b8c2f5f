//! # Modtrack CLI
//!
//! The binary is thin: everything lives in `cli/`, and this file only calls
//! `cli::run()` and turns an error into exit code 1.
//!
//! ```text
//! modtrack                          # interactive session until `exit` or EOF
//! modtrack list                     # run one command line and quit
//! modtrack add n/CS2103T r/https://nusmods.com s/290323 12:00 v/I3-Aud
//! modtrack --data-dir ./sem2 -vv find Lecture
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
