//! Timers driven by explicit instants.
//!
//! - `Debouncer`: trailing-edge coalescing of rapid guesses
//! - `Deferred`: the pause between a lost round and its clear
//!
//! Neither spawns anything. The owner polls them with the current time and
//! asks for the next deadline to know how long it may sleep.

mod debounce;
mod deferred;

pub use debounce::Debouncer;
pub use deferred::Deferred;
