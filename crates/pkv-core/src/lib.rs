//! Shared configuration and error types for the pkv workspace.

pub mod config;
pub mod error;
