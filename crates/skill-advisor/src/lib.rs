//! Rule-based progression advisor: profile in, three ranked next actions out.

pub mod advisor;
pub mod config;
pub mod error;
pub mod telemetry;
