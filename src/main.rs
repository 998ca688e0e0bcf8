// ABOUTME: Main entry point for the SproutPay demo banking TUI
//
// Binary: sproutpay
// Usage: sproutpay [OPTIONS]
// - No options: launches the onboarding wizard
// - --skip-onboarding: jump straight to a main screen
// - --screen: which screen to open when skipping onboarding

#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};

use sproutpay::app::{AppState, EventHandler};
use sproutpay::app::state::View;
use sproutpay::components::LayoutComponent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StartScreen {
    Dashboard,
    Tools,
    Profile,
    Parental,
}

impl From<StartScreen> for View {
    fn from(screen: StartScreen) -> Self {
        match screen {
            StartScreen::Dashboard => View::Dashboard,
            StartScreen::Tools => View::FinancialTools,
            StartScreen::Profile => View::AccountProfile,
            StartScreen::Parental => View::ParentalPortal,
        }
    }
}

#[derive(Parser)]
#[command(name = "sproutpay", about = "Terminal demo banking app for young savers")]
struct Cli {
    /// Skip the onboarding wizard and open a main screen directly
    #[arg(long)]
    skip_onboarding: bool,

    /// Which screen to open when skipping onboarding
    #[arg(long, value_enum, default_value = "dashboard")]
    screen: StartScreen,
}

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn cleanup_terminal_with_instance(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    setup_logging()?;
    setup_panic_handler();

    let args = Cli::parse();

    let mut state = AppState::new();
    if args.skip_onboarding {
        tracing::info!(screen = ?args.screen, "skipping onboarding wizard");
        state.skip_onboarding(args.screen.into());
    }
    let mut layout = LayoutComponent::new();

    let result = run_tui(&mut state, &mut layout);

    // Ensure terminal is cleaned up on any error
    if result.is_err() {
        cleanup_terminal();
    }

    result
}

fn run_tui(state: &mut AppState, layout: &mut LayoutComponent) -> Result<()> {
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui_loop(state, layout, &mut terminal);

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

fn run_tui_loop(
    state: &mut AppState,
    layout: &mut LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            layout.render(frame, state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if let Some(app_event) = EventHandler::handle_key_event(key_event, state) {
                    EventHandler::process_event(app_event, state);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

fn setup_logging() -> Result<()> {
    use std::fs::OpenOptions;
    use std::path::PathBuf;
    use tracing_subscriber::prelude::*;

    let log_dir = dirs::home_dir()
        .map(|home| home.join(".sproutpay").join("logs"))
        .unwrap_or_else(|| PathBuf::from(".sproutpay/logs"));

    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let log_file = log_dir.join(format!(
        "sproutpay-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("failed to create log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sproutpay=info".into()),
        )
        .init();

    Ok(())
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Restore the terminal before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
