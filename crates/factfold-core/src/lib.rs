//! Configuration and orchestration for factfold.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from YAML into strongly-typed
//!   structs, with environment overrides for file paths.
//! - [`pipeline`] -- [`run`], the load-fold-write pass, and the pure
//!   [`fold`] it wraps.
//!
//! [`run`]: pipeline::run
//! [`fold`]: pipeline::fold

pub mod config;
pub mod pipeline;
