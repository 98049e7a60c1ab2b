//! Environment-specific configuration.
use crate::{error::Error, extension::TomlTableExt};
use std::{
    fs,
    path::{Path, PathBuf},
};
use toml::Table;

mod env;

pub use env::Env;

/// Configuration state for a running environment.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Environment.
    env: Env,
    /// Configuration.
    config: Table,
    /// Project directory which relative paths in the config are resolved against.
    project_dir: Option<PathBuf>,
}

impl State {
    /// Creates a new instance with an empty config.
    #[inline]
    pub fn new(env: Env) -> Self {
        Self {
            env,
            config: Table::new(),
            project_dir: None,
        }
    }

    /// Creates a new instance with the config parsed from a TOML document.
    pub fn with_config_str(env: Env, config: &str) -> Result<Self, Error> {
        let config = config
            .parse::<Table>()
            .map_err(|err| Error::with_source("fail to parse the config", err))?;
        Ok(Self {
            env,
            config,
            project_dir: None,
        })
    }

    /// Loads the config file `config.{env}.toml` from the directory.
    /// The parent of `config_dir` becomes the project directory.
    pub fn load_config(&mut self, config_dir: impl AsRef<Path>) -> Result<(), Error> {
        let config_dir = config_dir.as_ref();
        let path = config_dir.join(format!("config.{}.toml", self.env));
        let content = fs::read_to_string(&path).map_err(|err| {
            let path = path.display();
            Error::with_source(format!("fail to read the config file `{path}`"), err)
        })?;
        self.config = content.parse::<Table>().map_err(|err| {
            let path = path.display();
            Error::with_source(format!("fail to parse the config file `{path}`"), err)
        })?;
        self.project_dir = config_dir.parent().map(Path::to_path_buf);
        tracing::info!(env = self.env.as_str(), "loaded the config file `{}`", path.display());
        Ok(())
    }

    /// Returns the env.
    #[inline]
    pub fn env(&self) -> Env {
        self.env
    }

    /// Returns a reference to the config.
    #[inline]
    pub fn config(&self) -> &Table {
        &self.config
    }

    /// Returns the project directory if the config was loaded from a file.
    #[inline]
    pub fn project_dir(&self) -> Option<&Path> {
        self.project_dir.as_deref()
    }

    /// Returns the path of the default case suite in the `[suite]` table.
    /// A relative path is resolved against the project directory.
    pub fn suite_path(&self) -> Option<PathBuf> {
        let path = self
            .config
            .get_table("suite")
            .and_then(|suite| suite.get_str("path"))
            .map(PathBuf::from)?;
        match &self.project_dir {
            Some(dir) if path.is_relative() => Some(dir.join(path)),
            _ => Some(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Env, State};
    use crate::extension::TomlTableExt;
    use std::path::{Path, PathBuf};

    #[test]
    fn it_parses_config() {
        let state = State::with_config_str(
            Env::Prod,
            r#"
            [tracing]
            level = "warn"
            ansi = false

            [suite]
            path = "cases/time.toml"
            "#,
        )
        .unwrap();
        assert!(state.env().is_prod());
        let tracing = state.config().get_table("tracing").unwrap();
        assert_eq!(tracing.get_str("level"), Some("warn"));
        assert_eq!(tracing.get_bool("ansi"), Some(false));
        assert_eq!(state.suite_path(), Some(PathBuf::from("cases/time.toml")));

        assert!(State::with_config_str(Env::Dev, "[tracing").is_err());
        assert!(State::new(Env::Dev).suite_path().is_none());
    }

    #[test]
    fn it_loads_config_file() {
        let config_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/config");
        for env in [Env::Dev, Env::Prod] {
            let mut state = State::new(env);
            state.load_config(config_dir).unwrap();
            assert!(state.config().get_table("tracing").is_some());
            assert_eq!(
                state.project_dir(),
                Some(Path::new(env!("CARGO_MANIFEST_DIR")))
            );
            assert_eq!(
                state.suite_path(),
                Some(Path::new(env!("CARGO_MANIFEST_DIR")).join("cases/time.toml"))
            );
        }
    }

    #[test]
    fn it_reports_missing_config_file() {
        let mut state = State::new(Env::Custom("missing"));
        let err = state.load_config("does-not-exist").unwrap_err();
        assert!(err.message().contains("config.missing.toml"));
    }
}
