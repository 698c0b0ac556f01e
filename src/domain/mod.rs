//! Domain Layer
//!
//! Value types and ports for the build → test → compare loop.
//!
//! ## Structure
//!
//! - `value_objects/` - Gold file sets, the output mapping, comparison and
//!   pipeline outcomes, watch snapshots
//! - `ports/` - Interface definitions for infrastructure (processes, files)
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - the disk and child processes are reached only through ports
//! 2. **Ports & Adapters** - tests swap in fakes for every external tool

pub mod ports;
pub mod value_objects;
