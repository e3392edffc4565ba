//! CLI command implementations

mod config;
mod info;
mod record;

pub use config::{ConfigArgs, config};
pub use info::{InfoArgs, info};
pub use record::{RecordArgs, record};
