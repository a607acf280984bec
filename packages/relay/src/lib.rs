// FACEIT demo relay - core library
//
// Polls FACEIT hubs for finished matches, brands each match's demo with the
// sponsor line and uploads it to demos.tf. Progress per hub is tracked as a
// watermark in a JSON file.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod relay;

pub use config::*;
pub use relay::{process_hub, relay_match, run, HubOutcome, RunReport};
