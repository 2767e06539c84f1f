mod cli;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;

use joyserial::app::{poll_interval, Dispatcher, Poller, StopFlag};
use joyserial::sink::SerialSink;
use joyserial::{logging, print_debug, print_error, print_info, probe, AppError};
use joyserial_input::{backend_version, SdlInput};
use joyserial_profile::Registry;

use crate::cli::Cli;

const SHUTDOWN_CHECK_INTERVAL: Duration = Duration::from_millis(100);

type Output = Box<dyn Write + Send>;

fn open_output(path: Option<&Path>) -> Result<Output, AppError> {
    match path {
        Some(path) => {
            let file = OpenOptions::new().append(true).create(true).open(path)?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

fn load_registry(profile: Option<&Path>) -> Result<Registry, AppError> {
    let mut registry = Registry::builtin();
    if let Some(path) = profile {
        let loaded = Registry::load(path)?;
        print_debug!("loaded {} device(s) from {}", loaded.len(), path.display());
        registry.extend(loaded);
    }
    Ok(registry)
}

fn run(cli: Cli) -> Result<(), AppError> {
    let registry = load_registry(cli.profile.as_deref())?;
    if cli.list {
        let mut out = io::stdout().lock();
        for name in registry.names() {
            writeln!(out, "{name}")?;
        }
        return Ok(());
    }

    let stop = StopFlag::new();
    let interrupt = stop.clone();
    ctrlc::set_handler(move || interrupt.stop())?;
    print_debug!("input backend: {}", backend_version());

    if cli.controller_name.contains("test") {
        print_info!("dumping raw events of joystick {}", cli.joystick_index);
        let mut out = open_output(cli.output.as_deref())?;
        let mut input = SdlInput::new(cli.joystick_index);
        return probe::run(&mut input, &mut out, &stop, poll_interval(cli.poll_hz));
    }

    let config = registry.select(&cli.controller_name)?;
    let sink = SerialSink::new(open_output(cli.output.as_deref())?, cli.line_ending);
    let index = cli.joystick_index;
    let handle = Poller::new(Dispatcher::new(config, sink), stop)
        .with_poll_rate(cli.poll_hz)
        .spawn(move || SdlInput::new(index))?;

    print_debug!("device info:\n{}", handle.info());
    print_info!("forwarding events of \"{}\"", handle.info().name);

    while !handle.is_shutdown() {
        thread::sleep(SHUTDOWN_CHECK_INTERVAL);
    }
    handle.join()?;
    print_debug!("stopped");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup(cli.debug, cli.no_color);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error!("{e}");
            ExitCode::FAILURE
        }
    }
}
