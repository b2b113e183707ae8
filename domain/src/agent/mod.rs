//! Research agents: static profiles and their report value object

pub mod profile;
pub mod report;

pub use profile::AgentProfile;
pub use report::{AgentReport, DEFAULT_CONFIDENCE};
