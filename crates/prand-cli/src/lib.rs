//! prand command-line front end.
//!
//! Reads its configuration from the environment and draws values from a
//! [`prand_core::Prand`] generator.

pub mod config;
pub mod draw;
pub mod error;
