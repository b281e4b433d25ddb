pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod tls;
pub mod uri;
