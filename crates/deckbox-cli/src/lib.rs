//! Library surface of the Deckbox loader CLI.
//!
//! Exposes the logging setup and the pipeline entry point so integration
//! tests can drive a run without spawning the binary.

pub mod logging;
pub mod pipeline;
