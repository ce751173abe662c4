use calcpad::config;
use calcpad::ui::{self, CalculatorTheme};
use clap::Parser;
use gpui::{App, Application};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "calcpad", version, about = "A small desktop calculator")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Log level used when `RUST_LOG` is not set.
fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_level(cli.verbose))),
        )
        .init();

    let config = config::load(cli.config.as_deref())?;
    ui::init_theme(CalculatorTheme::from_config(&config.theme));
    let window_config = config.window;

    info!("Starting calcpad");

    Application::new().run(move |cx: &mut App| {
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        if let Err(err) = ui::open_window(&window_config, cx) {
            error!("Failed to open calculator window: {err:#}");
            cx.quit();
            return;
        }

        cx.activate(true);
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(default_log_level(0), "warn");
        assert_eq!(default_log_level(1), "info");
        assert_eq!(default_log_level(2), "debug");
        assert_eq!(default_log_level(7), "trace");
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["calcpad", "-vv", "--config", "/tmp/calc.toml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/calc.toml")));

        let cli = Cli::try_parse_from(["calcpad"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
    }
}
