// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing configuration resolver implementations.
//!
//! This module contains concrete implementations of the
//! [`ConfigResolver`](crate::ports::ConfigResolver) port: an in-memory map
//! resolver and a process-environment resolver built on top of it.

pub mod env;
pub mod map;

// Re-export adapters
pub use env::EnvResolver;
pub use map::MapResolver;
