//! Use cases - application flows built on the domain and the ports

pub mod extract_questions;
pub mod orchestrate;
pub mod research;
pub mod run_agent;
pub mod synthesize;
