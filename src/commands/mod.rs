//! CLI command implementations.

pub mod check;
pub mod init;
pub mod run;
pub mod sources;
