use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use goldrun::config::{ColorMode, Config};
use goldrun::presentation::{ColorWhen, SeparatorStyle};

/// Terminal decisions made once at startup and passed to every command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub caps: TerminalCapabilities,
    pub color: bool,
}

impl UiContext {
    pub fn new(cli_color: Option<ColorWhen>, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(cli_color, config, caps)
    }

    pub(crate) fn from_caps(
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self { caps, color }
    }

    pub fn separator_style(&self) -> SeparatorStyle {
        SeparatorStyle::new(self.caps.width, self.color)
    }
}
