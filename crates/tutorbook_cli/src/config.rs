//! Command-line and environment configuration.

use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "tutorbook", version, about = "Keep track of students, lessons and assignments.")]
pub struct CliArgs {
    /// SQLite data file holding the record book.
    #[arg(long, env = "TUTORBOOK_DATA_FILE", default_value = "data/tutorbook.sqlite3")]
    pub data_file: PathBuf,

    /// Directory for rotated log files.
    #[arg(long, env = "TUTORBOOK_LOG_DIR", default_value = "logs")]
    pub log_dir: PathBuf,

    /// trace|debug|info|warn|error; defaults by build mode.
    #[arg(long, env = "TUTORBOOK_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Fully resolved runtime settings; all paths are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl CliArgs {
    pub fn resolve(self) -> io::Result<Config> {
        let cwd = std::env::current_dir()?;
        Ok(self.resolve_against(&cwd))
    }

    fn resolve_against(self, cwd: &Path) -> Config {
        Config {
            data_file: absolutize(cwd, self.data_file),
            log_dir: absolutize(cwd, self.log_dir),
            log_level: self
                .log_level
                .unwrap_or_else(|| tutorbook_core::default_log_level().to_string()),
        }
    }
}

fn absolutize(cwd: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn relative_paths_resolve_against_working_directory() {
        let args = CliArgs::try_parse_from([
            "tutorbook",
            "--data-file",
            "books/mine.sqlite3",
            "--log-dir",
            "logs",
            "--log-level",
            "warn",
        ])
        .expect("valid arguments");
        let cwd = std::env::temp_dir();
        let config = args.resolve_against(&cwd);

        assert_eq!(config.data_file, cwd.join("books/mine.sqlite3"));
        assert_eq!(config.log_dir, cwd.join("logs"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn absolute_paths_are_kept() {
        let data_file = std::env::temp_dir().join("tutorbook.sqlite3");
        let args = CliArgs {
            data_file: data_file.clone(),
            log_dir: "logs".into(),
            log_level: None,
        };
        let config = args.resolve_against(Path::new("unused"));
        assert_eq!(config.data_file, data_file);
        assert_eq!(config.log_level, tutorbook_core::default_log_level());
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(CliArgs::try_parse_from(["tutorbook", "--verbose"]).is_err());
    }
}
