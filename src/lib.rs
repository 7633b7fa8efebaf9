#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod chart;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use chart::{ChartScale, SvgSurface, render_chart};
pub use data::{MarketDataSource, MoexClient};
pub use domain::{CandlePoint, SecurityRef};
pub use engine::{ChartController, ViewState};
pub use ui::MoexChartApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

use crate::config::MoexApiConfig;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// ISS base URL (defaults to the public MOEX server)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Symbol to open on start, overriding the remembered one
    #[arg(long)]
    pub symbol: Option<String>,
}

impl Cli {
    pub fn api_config(&self) -> MoexApiConfig {
        match &self.base_url {
            Some(url) => MoexApiConfig::with_base_url(url.as_str()),
            None => MoexApiConfig::default(),
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, cli: Cli) -> Box<dyn eframe::App> {
    let app = ui::MoexChartApp::new(cc, cli.api_config(), cli.symbol);
    Box::new(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_public_server() {
        let cli = Cli::parse_from(["moex-chart"]);
        assert_eq!(cli.api_config().base_url, "https://iss.moex.com");
        assert_eq!(cli.symbol, None);
    }

    #[test]
    fn cli_overrides_base_url_and_symbol() {
        let cli = Cli::parse_from([
            "moex-chart",
            "--base-url",
            "http://localhost:8080/",
            "--symbol",
            "GAZP",
        ]);
        assert_eq!(cli.api_config().base_url, "http://localhost:8080");
        assert_eq!(cli.symbol.as_deref(), Some("GAZP"));
    }
}
