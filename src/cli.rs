use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pow")]
#[command(about = "A small nano-like terminal text editor")]
#[command(version)]
pub struct Cli {
    /// File to edit (starts an untitled buffer if omitted)
    pub file: Option<PathBuf>,

    /// Read settings from this file instead of the default config location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Minimum log level (debug, info, warn, error); overrides the config
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_and_flags() {
        let cli = Cli::parse_from(["pow", "notes.txt", "--config", "/tmp/pow.toml", "--log-level", "debug"]);
        assert_eq!(cli.file, Some(PathBuf::from("notes.txt")));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/pow.toml")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::parse_from(["pow"]);
        assert!(cli.file.is_none());
        assert!(cli.config.is_none());
    }
}
