//! `accident-risk` library crate.
//!
//! The binary (`accident-risk`) is a thin wrapper around this library so that:
//!
//! - the form → probability pipeline is testable without a terminal
//! - the encoding contract and model loading can be reused by other front-ends

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod models;
pub mod preprocess;
pub mod report;
pub mod scoring;
pub mod tui;

#[cfg(test)]
pub(crate) mod testing;
