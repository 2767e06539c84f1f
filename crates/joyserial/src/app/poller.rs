use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use colored::Colorize;

use joyserial_input::{DeviceInfo, InputSource};

use crate::error::AppError;
use crate::sink::LineSink;
use crate::{print_debug, print_info, print_warning};

use super::dispatcher::{Dispatcher, Flow};
use super::stop::StopFlag;

/// Drain frequency used when none is configured.
pub const DEFAULT_POLL_HZ: u32 = 60;

/// Time budget of one drain pass. `0` means unthrottled.
pub fn poll_interval(hz: u32) -> Option<Duration> {
    if hz == 0 {
        return None;
    }
    Some(Duration::from_secs(1) / hz)
}

/// Polling worker: drains the input source and feeds the dispatcher until
/// stopped.
pub struct Poller<S> {
    dispatcher: Dispatcher<S>,
    stop: StopFlag,
    interval: Option<Duration>,
}

impl<S> Poller<S>
where
    S: LineSink + Send + 'static,
{
    pub fn new(dispatcher: Dispatcher<S>, stop: StopFlag) -> Self {
        Self {
            dispatcher,
            stop,
            interval: poll_interval(DEFAULT_POLL_HZ),
        }
    }

    pub fn with_poll_rate(mut self, hz: u32) -> Self {
        self.interval = poll_interval(hz);
        self
    }

    /// Starts the worker thread.
    ///
    /// The input source is built and initialized on the worker, since backend
    /// state may not leave the thread that created it. Returns once the device
    /// has been opened and matched against the configuration, so a wrong
    /// device fails here before any event is processed.
    pub fn spawn<I, F>(self, make_input: F) -> Result<PollerHandle<S>, AppError>
    where
        I: InputSource,
        F: FnOnce() -> I + Send + 'static,
    {
        if self.interval.is_none() {
            print_warning!("polling is unthrottled");
        }
        let stop = self.stop.clone();
        let (ready_tx, ready_rx) = mpsc::channel::<Result<DeviceInfo, AppError>>();

        let worker = thread::Builder::new()
            .name("joyserial-poll".into())
            .spawn(move || {
                let mut poller = self;
                let mut input = make_input();
                let info = match attach(&mut input, poller.dispatcher.device_name()) {
                    Ok(info) => info,
                    Err(e) => {
                        input.shutdown();
                        let _ = ready_tx.send(Err(e));
                        return None;
                    }
                };
                let mut guard = WorkerGuard {
                    input,
                    stop: poller.stop.clone(),
                };
                let _ = ready_tx.send(Ok(info));
                poller.run(&mut guard.input);
                drop(guard);
                print_debug!("polling thread finished");
                Some(poller.dispatcher.into_sink())
            })?;

        match ready_rx.recv() {
            Ok(Ok(info)) => Ok(PollerHandle {
                info,
                stop,
                worker,
            }),
            Ok(Err(e)) => {
                let _ = worker.join();
                Err(e)
            }
            Err(_) => {
                let _ = worker.join();
                Err(AppError::WorkerExited)
            }
        }
    }

    fn run<I: InputSource>(&mut self, input: &mut I) {
        while !self.stop.is_stopped() {
            let started = Instant::now();
            for event in input.drain_pending_events() {
                if self.dispatcher.dispatch(&event) == Flow::Quit {
                    print_info!("input source requested quit");
                    return;
                }
            }
            match self.interval {
                Some(interval) => {
                    if let Some(rest) = interval.checked_sub(started.elapsed()) {
                        thread::sleep(rest);
                    }
                }
                None => thread::yield_now(),
            }
        }
    }
}

/// Owns the attached device. Dropping it, on return or on unwind, releases
/// the device and raises the stop flag.
struct WorkerGuard<I: InputSource> {
    input: I,
    stop: StopFlag,
}

impl<I: InputSource> Drop for WorkerGuard<I> {
    fn drop(&mut self) {
        self.input.shutdown();
        self.stop.stop();
    }
}

fn attach<I: InputSource>(input: &mut I, expected: &str) -> Result<DeviceInfo, AppError> {
    let info = input.initialize()?;
    if info.name != expected {
        return Err(AppError::DeviceMismatch {
            expected: expected.to_string(),
            found: info.name,
        });
    }
    Ok(info)
}

/// Handle to a running poller.
pub struct PollerHandle<S> {
    info: DeviceInfo,
    stop: StopFlag,
    worker: JoinHandle<Option<S>>,
}

impl<S> PollerHandle<S> {
    /// The device the worker attached to.
    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    /// Whether the worker has been asked to stop or has stopped on its own.
    pub fn is_shutdown(&self) -> bool {
        self.stop.is_stopped()
    }

    pub fn stop(&self) {
        self.stop.stop();
    }

    /// Waits for the worker and returns the sink it wrote to.
    pub fn join(self) -> Result<S, AppError> {
        match self.worker.join() {
            Ok(Some(sink)) => Ok(sink),
            _ => Err(AppError::WorkerExited),
        }
    }
}
