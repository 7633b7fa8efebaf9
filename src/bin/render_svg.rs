//! Headless export: fetch one symbol's candles and write the chart as SVG.

#[cfg(not(target_arch = "wasm32"))]
use anyhow::{Context, Result, bail};
#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(author, version, about = "Render a MOEX price chart to an SVG file")]
struct Args {
    /// Ticker to chart, e.g. SBER
    #[arg(long)]
    symbol: String,

    /// Output width in pixels
    #[arg(long, default_value_t = 960.0)]
    width: f64,

    /// Output height in pixels
    #[arg(long, default_value_t = moex_chart::config::PLOT_CONFIG.chart_height as f64)]
    height: f64,

    /// Destination file
    #[arg(long, default_value = "chart.svg")]
    out: std::path::PathBuf,

    /// ISS base URL
    #[arg(long, default_value = moex_chart::config::MOEX.base_url)]
    base_url: String,

    /// Use the dark theme colors
    #[arg(long, default_value_t = false)]
    dark: bool,
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<()> {
    use moex_chart::chart::{ChartTheme, SvgSurface, render_chart};
    use moex_chart::config::MoexApiConfig;
    use moex_chart::data::{MarketDataSource, MoexClient};

    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    let client = MoexClient::new(MoexApiConfig::with_base_url(&args.base_url))?;
    let series = client.fetch_candles(&args.symbol).await;
    if series.is_empty() {
        bail!("No candles for {}", args.symbol);
    }

    let mut surface = SvgSurface::new(args.width, args.height);
    let theme = ChartTheme::for_dark_mode(args.dark);
    render_chart(&mut surface, &series, &theme)
        .with_context(|| format!("Nothing to draw for {}", args.symbol))?;

    tokio::fs::write(&args.out, surface.document())
        .await
        .with_context(|| format!("Failed to write {:?}", args.out))?;

    log::info!(
        "Wrote {} candles for {} to {:?}",
        series.len(),
        args.symbol,
        args.out
    );
    Ok(())
}
