use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tempconv::app::AppState;
use tempconv::cli::Cli;
use tempconv::constants::{FRAME_DURATION_MS, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};
use tempconv::error::{AppError, Result};
use tempconv::persistence::PersistenceManager;
use tempconv::types::Config;
use tempconv::ui;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Validate CLI arguments
    cli.validate().map_err(AppError::InvalidArgument)?;

    // Initialize logging if requested; the guard flushes the writer on drop
    let _log_guard = match &cli.log_file {
        Some(log_file) => {
            let guard = init_logging(log_file)?;
            tracing::info!("=== Temperature converter starting ===");
            tracing::info!("Log file: {}", log_file);
            tracing::info!("Initial units: {:?} -> {:?}", cli.from, cli.to);
            Some(guard)
        }
        None => None,
    };

    // Check terminal size
    let (width, height) = crossterm::terminal::size()?;
    if width < MIN_TERMINAL_WIDTH || height < MIN_TERMINAL_HEIGHT {
        tracing::error!(
            "Terminal too small: {}x{} (minimum: {}x{})",
            width,
            height,
            MIN_TERMINAL_WIDTH,
            MIN_TERMINAL_HEIGHT
        );
        return Err(AppError::TerminalTooSmall {
            min_width: MIN_TERMINAL_WIDTH,
            min_height: MIN_TERMINAL_HEIGHT,
        });
    }
    tracing::debug!("Terminal size: {}x{}", width, height);

    let mut app = initialize_app_state(&cli)?;

    // Setup terminal
    setup_terminal()?;
    tracing::debug!("Terminal setup completed");

    // Setup Ctrl-C handler
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        tracing::info!("Ctrl-C received, shutting down");
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| AppError::Other(format!("Failed to set Ctrl-C handler: {}", e)))?;

    // Run the application
    let result = run_app(&mut app, running).await;

    // Cleanup terminal
    cleanup_terminal()?;
    tracing::debug!("Terminal cleanup completed");

    result
}

fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide)?;

    // Set panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal();
        original_hook(panic_info);
    }));

    Ok(())
}

fn cleanup_terminal() -> Result<()> {
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

fn init_logging(log_file: &str) -> Result<WorkerGuard> {
    use std::fs::OpenOptions;

    // Open/create log file, truncating if it exists
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_file)
        .map_err(|e| AppError::Other(format!("Failed to open log file: {}", e)))?;

    let (writer, guard) = tracing_appender::non_blocking(file);

    // Only log from our crate
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(EnvFilter::new("tempconv=debug"))
        .try_init()
        .map_err(|e| AppError::Other(format!("Failed to initialize logging: {}", e)))?;

    Ok(guard)
}

fn initialize_app_state(cli: &Cli) -> Result<AppState> {
    tracing::debug!("Initializing application state");

    let persistence = match &cli.config_dir {
        Some(dir) => PersistenceManager::with_dir(Path::new(dir)),
        None => PersistenceManager::new(),
    }
    .map_err(|e| {
        tracing::error!("Failed to initialize persistence: {}", e);
        AppError::ConfigDirError(e.to_string())
    })?;

    // Load config
    let config = persistence.load_config().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
        Config::default()
    });
    tracing::debug!("Config loaded: dark_mode={}", config.dark_mode);

    let mut app = AppState::new(config, persistence);
    app.from_unit = cli.from;
    app.to_unit = cli.to;

    match &cli.value {
        Some(value) => app.set_input(value),
        None => app.refresh_display(),
    }

    Ok(app)
}

async fn run_app(app: &mut AppState, running: Arc<AtomicBool>) -> Result<()> {
    // Create backend and terminal
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    run_event_loop(&mut terminal, app, running).await?;

    tracing::info!("Temperature converter shutting down");
    Ok(())
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    running: Arc<AtomicBool>,
) -> Result<()> {
    let frame_duration = Duration::from_millis(FRAME_DURATION_MS);

    while running.load(Ordering::SeqCst) && !app.should_quit {
        let frame_start = Instant::now();

        // Expire toasts and button highlights
        app.tick(frame_start);

        // Render UI
        terminal.draw(|f| {
            ui::layout::render(f, app);
        })?;

        // Poll for input events (non-blocking)
        if event::poll(Duration::from_millis(0))? {
            let ev = event::read()?;
            handle_event(app, ev)?;
        }

        // Sleep to maintain frame rate
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            tokio::time::sleep(frame_duration - elapsed).await;
        }
    }

    Ok(())
}

fn handle_event(app: &mut AppState, ev: Event) -> Result<()> {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            ui::handle_key_event(app, key)?;
        }
        Event::Resize(width, height) => {
            tracing::debug!("Terminal resized: {}x{}", width, height);
        }
        _ => {}
    }
    Ok(())
}
