//! # Trofes Domain
//!
//! Core types shared by every layer of the recipe engine: model bundles,
//! identifiers, requests and outcomes, the error type, and the ports the
//! recommendation core depends on.
//!
//! This crate has no I/O and no framework dependencies.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::*;
pub use error::{Error, Result};
pub use value_objects::*;
