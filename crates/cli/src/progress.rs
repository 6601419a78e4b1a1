use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Kinds of waits the CLI shows a spinner for
#[derive(Debug, Clone, Copy)]
pub enum ProgressType {
    /// Local work, sub-second
    Fast,
    /// Region data queries
    Query,
    /// Reverse geocoding through the LLM
    Geocode,
}

#[derive(Debug, Clone)]
pub struct ProgressConfig {
    pub spinner_chars: &'static str,
    pub tick_interval: Duration,
    pub color: &'static str,
    pub success_message: Option<String>,
}

impl ProgressType {
    pub fn config(self) -> ProgressConfig {
        match self {
            ProgressType::Fast => ProgressConfig {
                spinner_chars: "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏",
                tick_interval: Duration::from_millis(80),
                color: "cyan",
                success_message: None,
            },
            ProgressType::Query => ProgressConfig {
                spinner_chars: "🌱🌿🌾🌿",
                tick_interval: Duration::from_millis(200),
                color: "green",
                success_message: Some("✓ Region data ready".to_string()),
            },
            ProgressType::Geocode => ProgressConfig {
                spinner_chars: "🌍🌎🌏🌎",
                tick_interval: Duration::from_millis(250),
                color: "blue",
                success_message: Some("✓ Location resolved".to_string()),
            },
        }
    }

    pub fn create_spinner(self, message: &str) -> AdaptiveSpinner {
        let config = self.config();
        let spinner = ProgressBar::new_spinner();

        let template = match self {
            ProgressType::Query | ProgressType::Geocode => "{spinner} {msg}".to_string(),
            ProgressType::Fast => format!("{{spinner:.{}}} {{msg}}", config.color),
        };
        let style = ProgressStyle::default_spinner()
            .tick_chars(config.spinner_chars)
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(config.tick_interval);

        AdaptiveSpinner { spinner, config }
    }
}

pub struct AdaptiveSpinner {
    spinner: ProgressBar,
    config: ProgressConfig,
}

impl AdaptiveSpinner {
    pub fn set_message(&self, message: &str) {
        self.spinner.set_message(message.to_string());
    }

    pub fn finish_success(&self, message: Option<&str>) {
        let msg = message
            .or(self.config.success_message.as_deref())
            .unwrap_or("✓ Completed!");

        let colored_msg = match self.config.color {
            "blue" => msg.blue().to_string(),
            "cyan" => msg.cyan().to_string(),
            _ => msg.green().to_string(),
        };
        self.spinner.finish_with_message(colored_msg);
    }

    pub fn finish_error(&self, message: &str) {
        self.spinner
            .finish_with_message(format!("✗ {message}").red().to_string());
    }
}
