//! Shine TUI Entry Point
//!
//! Launches the terminal UI for Shine.
//!
//! Usage:
//!   shine
//!
//! Configuration is read from `$XDG_CONFIG_HOME/shine/shine.toml` and the
//! `SHINE_*` environment variables. Set `RUST_LOG` for diagnostics on stderr.

use std::io;
use std::panic;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shine_core::{load_config_or_default, ShineConfig};
use shine_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set up logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Check if we have a TTY before attempting initialization
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: shine requires a terminal (TTY)");
        eprintln!();
        eprintln!("This usually means:");
        eprintln!("  • Running in a non-interactive environment (CI, container)");
        eprintln!("  • SSH without -t flag");
        eprintln!("  • Piped stdin/stdout");
        std::process::exit(1);
    }

    let (config, config_error) = load_config_or_default();
    if let Some(e) = config_error {
        // Still on the main screen, so this stays visible after startup
        tracing::warn!("Ignoring configuration file: {}", e);
        eprintln!("\x1b[33mShine:\x1b[0m ignoring configuration file ({e}), using defaults");
    }

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    // Show goodbye message after TUI closes
    match result {
        Ok(Some(goodbye)) => {
            println!("\n\x1b[32mShine:\x1b[0m {}\n", goodbye);
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => Err(e),
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &ShineConfig,
) -> anyhow::Result<Option<String>> {
    let mut app = App::new(config)?;
    app.run(terminal).await?;
    Ok(app.goodbye().map(str::to_string))
}
