//! Change Watcher implementation

use std::panic::{self, AssertUnwindSafe};
use std::thread;

use tracing::{debug, info, warn};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::WatchState;

use super::event::{TickOutcome, WatchEvent, WatchOptions};

/// Polling change watcher
///
/// Holds the previous snapshot between ticks. The action is any
/// `FnMut() -> bool`; it never sees the watcher, which keeps polling
/// independent of what is being rerun.
pub struct ChangeWatcher<F> {
    fs: F,
    options: WatchOptions,
    previous: WatchState,
    /// Message of the snapshot error in the current failure streak
    last_failure: Option<String>,
}

impl<F: FileSystem> ChangeWatcher<F> {
    pub fn new(fs: F, options: WatchOptions) -> Self {
        Self {
            fs,
            options,
            previous: WatchState::default(),
            last_failure: None,
        }
    }

    pub fn options(&self) -> &WatchOptions {
        &self.options
    }

    /// Take the initial snapshot and run the action once unconditionally.
    ///
    /// The snapshot is taken before the action, so anything the first run
    /// touches among the watched files triggers the next run.
    pub fn start<A, E>(&mut self, action: &mut A, on_event: &mut E) -> bool
    where
        A: FnMut() -> bool,
        E: FnMut(WatchEvent),
    {
        self.previous = self.capture(on_event).unwrap_or_default();

        info!(
            files = self.previous.len(),
            patterns = ?self.options.patterns,
            "watching"
        );
        on_event(WatchEvent::Started {
            patterns: self.options.patterns.clone(),
            files: self.previous.len(),
        });

        self.run_action(action, on_event)
    }

    /// One poll: compare a fresh snapshot with the previous one and rerun on
    /// difference. An unchanged tick sleeps for the interval and emits nothing.
    pub fn tick<A, E>(&mut self, action: &mut A, on_event: &mut E) -> TickOutcome
    where
        A: FnMut() -> bool,
        E: FnMut(WatchEvent),
    {
        let Some(current) = self.capture(on_event) else {
            thread::sleep(self.options.interval);
            return TickOutcome::Unchanged;
        };

        if current == self.previous {
            thread::sleep(self.options.interval);
            return TickOutcome::Unchanged;
        }

        let paths = current.changed_paths(&self.previous);
        debug!(changed = ?paths, "watched files changed");
        self.previous = current;
        on_event(WatchEvent::Changed { paths });

        let success = self.run_action(action, on_event);
        TickOutcome::Ran { success }
    }

    /// Watch forever. There is no in-band stop; the process is interrupted.
    pub fn run<A, E>(mut self, mut action: A, mut on_event: E) -> !
    where
        A: FnMut() -> bool,
        E: FnMut(WatchEvent),
    {
        self.start(&mut action, &mut on_event);
        loop {
            self.tick(&mut action, &mut on_event);
        }
    }

    /// Take a snapshot. A failure is reported once per streak of identical
    /// errors; repeats are only logged at debug level.
    fn capture<E>(&mut self, on_event: &mut E) -> Option<WatchState>
    where
        E: FnMut(WatchEvent),
    {
        match WatchState::capture(&self.fs, &self.options.patterns) {
            Ok(state) => {
                if self.last_failure.take().is_some() {
                    info!("snapshot recovered");
                }
                Some(state)
            }
            Err(err) => {
                let message = err.to_string();
                if self.last_failure.as_deref() == Some(message.as_str()) {
                    debug!(error = %message, "snapshot still failing");
                } else {
                    warn!(error = %message, "snapshot failed, treating as unchanged");
                    on_event(WatchEvent::PollFailed {
                        message: message.clone(),
                    });
                    self.last_failure = Some(message);
                }
                None
            }
        }
    }

    fn run_action<A, E>(&self, action: &mut A, on_event: &mut E) -> bool
    where
        A: FnMut() -> bool,
        E: FnMut(WatchEvent),
    {
        let success = match panic::catch_unwind(AssertUnwindSafe(|| action())) {
            Ok(success) => success,
            Err(_) => {
                warn!("watched action panicked");
                false
            }
        };
        on_event(WatchEvent::RunFinished { success });
        success
    }
}
