use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use circl_notify::config::{self, ConfigResult};
use circl_notify::notification::Notification;
use circl_notify::push::{self, PushEnvelope};
use circl_notify::App;

/// Terminal host for Circl in-app notifications
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Circl in-app notifications: banner queue, tap navigation and unread message polling"
)]
struct Args {
    /// Config file (defaults to ~/.config/circl/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not start the unread message poller even if it is enabled in config
    #[arg(long)]
    no_poll: bool,

    /// Replay push payloads from a file containing one JSON object per line
    #[arg(long, value_name = "PATH")]
    push_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Writes to /tmp/circl-notify-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/circl-notify-debug.log")?;

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== CIRCL NOTIFY SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    let config_result = config::load_config(args.config.as_deref());

    // Bad push files fail before the terminal is taken over
    let pushes = match &args.push_file {
        Some(path) => push::load_push_file(path)?,
        None => Vec::new(),
    };

    let terminal = init_terminal()?;

    let app = App::new(&config_result.config);
    let result = run(terminal, app, config_result, pushes, args.no_poll);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== CIRCL NOTIFY SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config_result: ConfigResult,
    pushes: Vec<PushEnvelope>,
    no_poll: bool,
) -> Result<()> {
    if let Some(warning) = &config_result.warning {
        app.submit(Notification::system("Config", warning));
    }

    setup_poller(&mut app, &config_result.config, no_poll);

    let delivered = pushes
        .iter()
        .filter(|envelope| app.handle_push(envelope).is_some())
        .count();
    log::debug!("Replayed {} of {} pushes", delivered, pushes.len());

    loop {
        if let Some(trigger) = app.take_navigation() {
            log::debug!(
                "Navigation #{} to {:?}",
                trigger.generation,
                trigger.target
            );
        }

        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    app.stop_poller();
    Ok(())
}

/// Start the unread message poller when the config allows it
fn setup_poller(app: &mut App, config: &config::Config, no_poll: bool) {
    if no_poll {
        log::debug!("Message poller disabled from the command line");
        return;
    }
    if !config.poller.is_runnable() {
        log::debug!("Message poller not enabled in config");
        return;
    }

    if let Err(e) = app.start_poller(&config.poller) {
        log::error!("Failed to start message poller: {}", e);
        app.submit(Notification::system("Poller", &e.to_string()));
    }
}
