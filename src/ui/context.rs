use folio::config::{BuildConfig, Verbosity};

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// How the current command should print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, config: &BuildConfig) -> Self {
        Self::from_caps(json, verbose, config, detect_capabilities())
    }

    pub(crate) fn from_caps(json: bool, verbose: u8, config: &BuildConfig, caps: TerminalCapabilities) -> Self {
        // `-v` on the command line wins over the configured verbosity
        let verbose = if verbose > 0 { verbose } else { config.output.verbosity.level() };

        Self {
            json,
            verbose,
            caps,
            color: !json && caps.supports_color && !caps.is_ci,
            unicode: caps.supports_unicode,
        }
    }

    pub fn quiet(&self, config: &BuildConfig) -> bool {
        self.verbose == 0 && config.output.verbosity == Verbosity::Quiet
    }
}
