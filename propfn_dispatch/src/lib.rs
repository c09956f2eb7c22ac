//! Reflection-free dispatch for well-known property functions.
//!
//! [`Dispatcher`] is the single entry point: given a receiver type, a
//! method name, an optional instance, and an argument vector, it either
//! resolves the call against one of the fixed per-receiver libraries under
//! [`libraries`] or returns `Ok(None)` so the caller can fall back to
//! reflection. See [`router`] for the selection logic and [`traits`] for
//! the two seams (`StaticLibrary`, `InstanceLibrary`) every library
//! implements.

pub mod collab;
pub mod config;
pub mod fallback_log;
pub mod function_id;
pub mod libraries;
pub mod outcome;
pub mod router;
pub mod traits;

pub use collab::{Collaborators, FeatureAvailability, FeatureWave, FileSystem, LogSink, OsPlatform, Registry};
pub use config::DispatcherConfig;
pub use fallback_log::FallbackLog;
pub use outcome::{DispatchOutcome, DispatchResult};
pub use router::{Dispatcher, ReceiverType};
pub use traits::{InstanceLibrary, StaticLibrary};
