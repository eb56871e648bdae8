//! Domain types for the accident-risk form.
//!
//! This module defines:
//!
//! - the closed-choice options each widget offers (`choices`)
//! - form state, record fields and the assembled `InputRecord` (`form`)
//! - the record assembler (`assemble`)

pub mod assemble;
pub mod choices;
pub mod form;

pub use assemble::*;
pub use choices::*;
pub use form::*;
