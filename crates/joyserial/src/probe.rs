//! Raw event dump for checking what a joystick actually reports.

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use joyserial_input::{InputEvent, InputSource};

use crate::app::StopFlag;
use crate::error::AppError;

/// Opens `input` without a device configuration and writes every event in
/// its debug form until a quit event or a stop request.
///
/// The input source is shut down on every exit path.
pub fn run<I, W>(
    input: &mut I,
    out: &mut W,
    stop: &StopFlag,
    interval: Option<Duration>,
) -> Result<(), AppError>
where
    I: InputSource,
    W: Write,
{
    let result = dump(input, out, stop, interval);
    input.shutdown();
    result
}

fn dump<I, W>(
    input: &mut I,
    out: &mut W,
    stop: &StopFlag,
    interval: Option<Duration>,
) -> Result<(), AppError>
where
    I: InputSource,
    W: Write,
{
    let info = input.initialize()?;
    writeln!(out, "Joystick test mode")?;
    writeln!(out, "{info}")?;
    out.flush()?;

    while !stop.is_stopped() {
        let started = Instant::now();
        for event in input.drain_pending_events() {
            writeln!(out, "{event:?}")?;
            if event == InputEvent::Quit {
                out.flush()?;
                return Ok(());
            }
        }
        out.flush()?;
        if let Some(rest) = interval.and_then(|i| i.checked_sub(started.elapsed())) {
            thread::sleep(rest);
        }
    }
    Ok(())
}
