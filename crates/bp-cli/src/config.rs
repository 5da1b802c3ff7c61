//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Print the input instructions when a session starts.
    pub show_instructions: bool,

    /// Lines that end an interactive session.
    pub exit_commands: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_instructions: true,
            exit_commands: vec!["quit".to_string(), "exit".to_string()],
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // BREAKPEAK_SHOW_INSTRUCTIONS=false etc.
        figment = figment.merge(Env::prefixed("BREAKPEAK_"));

        figment.extract()
    }

    /// Whether `line` ends the interactive session.
    pub fn is_exit_command(&self, line: &str) -> bool {
        self.exit_commands.iter().any(|cmd| cmd == line)
    }
}

/// Returns the platform-specific config directory for breakpeak.
///
/// On Linux: `~/.config/breakpeak`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("breakpeak"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use figment::Jail;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.show_instructions);
        assert_eq!(config.exit_commands, vec!["quit", "exit"]);
    }

    #[test]
    fn test_exit_commands_match_exactly() {
        let config = Config::default();
        assert!(config.is_exit_command("quit"));
        assert!(config.is_exit_command("exit"));
        assert!(!config.is_exit_command("QUIT"));
        assert!(!config.is_exit_command(" quit"));
        assert!(!config.is_exit_command("09:0010:00"));
    }

    #[test]
    fn test_dirs_config_path_ends_with_breakpeak() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "breakpeak");
    }

    #[test]
    fn test_load_from_file_and_env() {
        Jail::expect_with(|jail| {
            jail.set_env("HOME", jail.directory().display().to_string());
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display().to_string());
            jail.create_file(
                "breakpeak.toml",
                r#"
                    show_instructions = false
                    exit_commands = ["bye"]
                "#,
            )?;

            let config = Config::load_from(Some(Path::new("breakpeak.toml")))?;
            assert!(!config.show_instructions);
            assert_eq!(config.exit_commands, vec!["bye"]);

            jail.set_env("BREAKPEAK_SHOW_INSTRUCTIONS", "true");
            let config = Config::load_from(Some(Path::new("breakpeak.toml")))?;
            assert!(config.show_instructions);
            Ok(())
        });
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("HOME", jail.directory().display().to_string());
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display().to_string());
            let config = Config::load_from(Some(Path::new("absent.toml")))?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }
}
