//! Change Watcher
//!
//! Polls the watched glob patterns and reruns an action whenever the set of
//! `(path, mtime)` pairs changes. It is a plain sleep-and-compare loop with no
//! OS file-event subscription, so timing is fully determined by the poll
//! interval.
//!
//! ## Architecture
//!
//! - `ChangeWatcher` - Snapshot bookkeeping and the poll loop
//! - `WatchEvent` - Emitted to a callback; the caller decides how to render
//!   separators, clear the screen, and log
//!
//! ## Usage
//!
//! ```ignore
//! let watcher = ChangeWatcher::new(LocalFs::new("."), options);
//! watcher.run(|| pipeline_passes(), |event| printer.handle(&event));
//! ```

mod event;
mod use_case;


pub use event::{TickOutcome, WatchEvent, WatchOptions, DEFAULT_POLL_INTERVAL_MS};
pub use use_case::ChangeWatcher;
