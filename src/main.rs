use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use flexi_logger::{Age, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use log::{debug, error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{backtrace::Backtrace, io, panic, time::Duration};

mod app;
mod cli;
mod clock;
mod icon;
mod screen;
mod source;
mod weather;

use crate::app::run_app;
use crate::cli::Args;
use crate::clock::SystemClock;
use crate::screen::Screen;
use crate::source::{DataState, FileSource, MockSource};

fn start_logger(args: &Args) -> anyhow::Result<LoggerHandle> {
    let log_dir = args
        .log_dir
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("wxscreen"));

    Logger::try_with_str(&args.log_level)
        .with_context(|| format!("invalid log level {:?}", args.log_level))?
        .log_to_file(FileSpec::default().directory(log_dir).basename("wxscreen"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(7),
        )
        .start()
        .context("failed to start logger")
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _logger = start_logger(&args)?;
    debug!("args: {args:?}");

    panic::set_hook(Box::new(|info| {
        let _ = restore_terminal();
        let b = Backtrace::capture();
        error!("Panic: {info} \n {b}");
        eprintln!("{info}");
    }));

    let data = match &args.data {
        Some(path) => DataState::load(&FileSource::new(path)),
        None => DataState::load(&MockSource),
    };
    let mut screen = Screen::new(data, SystemClock, Duration::from_secs(args.refresh));

    // setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let res = Terminal::new(CrosstermBackend::new(stdout)).and_then(|mut terminal| {
        let res = run_app(&mut terminal, &mut screen);
        terminal.show_cursor()?;
        res
    });

    // restore terminal
    restore_terminal().context("failed to restore terminal")?;

    res.context("weather screen failed")?;
    info!("exiting");
    Ok(())
}
