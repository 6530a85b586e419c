//! Session configuration.

use std::path::PathBuf;

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "wingman.msgpack";

/// Default log filter.
pub const DEFAULT_LOG_FILTER: &str = "wingman=warn";

/// Configuration for a [`Session`](crate::Session) and the REPL around it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// File the model is loaded from and saved to. `None` keeps everything
    /// in memory.
    pub data_path: Option<PathBuf>,

    /// Save after every command that changes the model.
    pub auto_save: bool,

    /// `tracing` filter directives for the log subscriber.
    pub log_filter: String,

    /// Whether the REPL prints its banner.
    pub show_banner: bool,

    /// REPL prompt.
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_path: Some(PathBuf::from(DEFAULT_DATA_FILE)),
            auto_save: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            show_banner: true,
            prompt: "wingman> ".to_string(),
        }
    }
}

impl SessionConfig {
    /// Creates a configuration that never touches the filesystem.
    #[must_use]
    pub fn ephemeral() -> Self {
        Self {
            data_path: None,
            auto_save: false,
            ..Self::default()
        }
    }

    /// Creates a configuration for scripted runs: no banner, no prompt.
    #[must_use]
    pub fn batch() -> Self {
        Self {
            show_banner: false,
            prompt: String::new(),
            ..Self::default()
        }
    }

    /// Builder method to set the data file.
    #[must_use]
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = Some(path.into());
        self
    }

    /// Builder method to enable/disable auto-save.
    #[must_use]
    pub fn with_auto_save(mut self, auto_save: bool) -> Self {
        self.auto_save = auto_save;
        self
    }

    /// Builder method to set the log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Builder method to show/hide the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}
