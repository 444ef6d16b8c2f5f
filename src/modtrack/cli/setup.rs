use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "modtrack", bin_name = "modtrack", version = get_version())]
#[command(about = "Track university modules, lectures and deadlines", long_about = None)]
#[command(
    after_help = "Examples:\n  modtrack list\n  modtrack add n/CS2103T r/https://nusmods.com s/290323 12:00 v/I3-Aud t/Lecture\n  modtrack edit 1 t/\n  modtrack            # interactive session, `exit` to leave"
)]
pub struct Cli {
    /// Directory holding the data file and config.json
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// A command line to run once; omit it for an interactive session
    #[arg(value_name = "COMMAND", trailing_var_arg = true)]
    pub command: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_means_interactive() {
        let cli = Cli::try_parse_from(["modtrack"]).unwrap();
        assert!(cli.command.is_empty());
        assert_eq!(cli.verbose, 0);
        assert!(cli.data_dir.is_none());
    }

    #[test]
    fn test_flags_then_command_words() {
        let cli = Cli::try_parse_from([
            "modtrack",
            "--data-dir",
            "/tmp/sem2",
            "-vv",
            "add",
            "n/CS3219",
            "s/300123",
            "11:00",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/sem2")));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.command.join(" "), "add n/CS3219 s/300123 11:00");
    }

    #[test]
    fn test_hyphenated_words_after_command_are_kept() {
        let cli = Cli::try_parse_from(["modtrack", "delete", "-1"]).unwrap();
        assert_eq!(cli.command, vec!["delete", "-1"]);
    }
}
