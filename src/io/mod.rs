//! Input/output helpers.
//!
//! - model artifact JSON reading and the file-backed loader (`artifact`)

pub mod artifact;

pub use artifact::*;
