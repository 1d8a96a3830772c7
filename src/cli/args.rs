//! CLI argument definitions for `InternHub`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use internhub::config::ConfigOverrides;
use internhub::logger::Level;
use internhub::models::Role;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime
/// use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// CLI role argument for the login command
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum RoleArg {
    /// Log in as the student account
    Student,
    /// Log in as the mentor account
    Mentor,
    /// Log in as the admin account
    Admin,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Student => Self::Student,
            RoleArg::Mentor => Self::Mentor,
            RoleArg::Admin => Self::Admin,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `file`, `session_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Navigate to a path and render the resolved page.
    ///
    /// Paths mirror the platform routes: `/`, `/login`, `/dashboard`,
    /// `/admin`. Guarded paths redirect according to the current session;
    /// every redirect hop is printed before the final page renders.
    Open {
        /// Path to navigate to (e.g., `/dashboard`)
        #[arg(value_name = "PATH")]
        path: String,

        /// Free-text catalog search (applies to `/` only)
        #[arg(short, long, value_name = "QUERY")]
        search: Option<String>,

        /// Catalog domain filter (applies to `/` only)
        #[arg(short, long, value_name = "DOMAIN")]
        domain: Option<String>,

        /// Write the rendered page to a file instead of stdout.
        ///
        /// Relative paths land in the configured exports directory.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Browse the opportunity catalog.
    ///
    /// Shorthand for `open /` with the same filters.
    Catalog {
        /// Free-text search across title, company, and domain
        #[arg(short, long, value_name = "QUERY")]
        search: Option<String>,

        /// Exact domain filter
        #[arg(short, long, value_name = "DOMAIN")]
        domain: Option<String>,
    },
    /// Log in as the demo account carrying a role.
    Login {
        /// Role to act under
        #[arg(value_enum, value_name = "ROLE")]
        role: RoleArg,
    },
    /// Log out and clear the persisted session.
    Logout,
    /// Show the currently logged-in user.
    Whoami,
}

#[derive(Parser, Debug)]
#[command(
    name = "internhub",
    about = "InternHub command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config session file path
    #[arg(long = "config-session-file", value_name = "PATH")]
    pub config_session_file: Option<PathBuf>,

    /// Override config session file path (short form)
    #[arg(long = "session-file", value_name = "PATH")]
    pub session_file: Option<PathBuf>,

    /// Override config exports directory
    #[arg(long = "config-exports-dir", value_name = "DIR")]
    pub config_exports_dir: Option<PathBuf>,

    /// Override config exports directory (short form)
    #[arg(long = "exports-dir", value_name = "DIR")]
    pub exports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration. Short-form flags (e.g.,
    /// `--session-file`) take precedence over long-form flags (e.g.,
    /// `--config-session-file`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None`
    /// means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            session_file: self
                .session_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_session_file
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            exports_dir: self
                .exports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_exports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_session_file: None,
            session_file: None,
            config_exports_dir: None,
            exports_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_role_arg_to_role() {
        assert_eq!(Role::from(RoleArg::Student), Role::Student);
        assert_eq!(Role::from(RoleArg::Mentor), Role::Mentor);
        assert_eq!(Role::from(RoleArg::Admin), Role::Admin);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = bare_cli(Command::Config { subcommand: None });

        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.session_file.is_none());
        assert!(overrides.exports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli(Command::Whoami);
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.session_file = Some(PathBuf::from("/tmp/session.json"));
        cli.exports_dir = Some(PathBuf::from("/exports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.session_file, Some("/tmp/session.json".to_string()));
        assert_eq!(overrides.exports_dir, Some("/exports".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let mut cli = bare_cli(Command::Whoami);
        cli.config_session_file = Some(PathBuf::from("/long/session.json"));
        cli.session_file = Some(PathBuf::from("/short/session.json"));
        cli.config_exports_dir = Some(PathBuf::from("/long/exports"));
        cli.exports_dir = Some(PathBuf::from("/short/exports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(
            overrides.session_file,
            Some("/short/session.json".to_string())
        );
        assert_eq!(overrides.exports_dir, Some("/short/exports".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let mut cli = bare_cli(Command::Whoami);
        cli.config_session_file = Some(PathBuf::from("/long/session.json"));
        cli.config_exports_dir = Some(PathBuf::from("/long/exports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(
            overrides.session_file,
            Some("/long/session.json".to_string())
        );
        assert_eq!(overrides.exports_dir, Some("/long/exports".to_string()));
    }
}
