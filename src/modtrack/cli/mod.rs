//! # CLI Layer
//!
//! The only place that reads stdin, writes stdout and picks exit codes. It
//! resolves the data directory, opens the tracker through
//! [`modtrack::api::TrackerApi`], and then either runs the command line given
//! on the shell or loops over lines typed by the user.
//!
//! A data file that cannot be loaded does not stop the program: the problem is
//! logged as a warning and the session starts empty. The next command that
//! changes modules overwrites the bad file.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap, version string
//! - `logging`: tracing subscriber setup
//! - `render`: Output formatting (module rows, colored messages)

mod logging;
mod render;
pub mod setup;

use clap::Parser;
use modtrack::api::TrackerApi;
use modtrack::commands::CmdMessage;
use modtrack::config::{resolve_data_dir, TrackerConfig};
use modtrack::error::Result;
use modtrack::fields::FieldRules;
use modtrack::store::fs::FileStore;
use modtrack::store::DataStore;
use setup::Cli;
use std::io::{self, BufRead, IsTerminal, Write};

const PROMPT: &str = "> ";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    let config = TrackerConfig::load(&data_dir)?;
    let data_path = config.data_path(&data_dir);
    tracing::debug!(path = %data_path.display(), "using data file");

    let mut api = match TrackerApi::open(FileStore::new(&data_path), FieldRules::standard()) {
        Ok(api) => api,
        Err(e) => {
            tracing::warn!(
                error = %e,
                path = %data_path.display(),
                "data file could not be loaded, starting with an empty module tracker"
            );
            TrackerApi::empty(FileStore::new(&data_path), FieldRules::standard())
        }
    };

    if cli.command.is_empty() {
        interactive(&mut api, &config)
    } else {
        let line = cli.command.join(" ");
        let result = api.execute(&line)?;
        render::print_result(&result, &config);
        Ok(())
    }
}

fn interactive<S: DataStore>(api: &mut TrackerApi<S>, config: &TrackerConfig) -> Result<()> {
    let stdin = io::stdin();
    let show_prompt = stdin.is_terminal();
    let mut line = String::new();

    if show_prompt {
        render::print_modules(&api.displayed(), config);
    }

    loop {
        if show_prompt {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match api.execute(&line) {
            Ok(result) => {
                render::print_result(&result, config);
                if result.exit {
                    break;
                }
            }
            Err(e) => {
                if !e.is_user_error() {
                    tracing::error!(error = %e, "command failed");
                }
                render::print_messages(&[CmdMessage::error(e.to_string())]);
            }
        }
    }
    Ok(())
}
