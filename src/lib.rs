//! mas generates service projects from a bundled set of templates.
//! It normalizes the project name, guards non-empty destinations, and writes
//! the directory tree, rendered service manifest, static files and
//! `package.json` in a fixed order.

/// Command-line interface module for the mas application
pub mod cli;

/// Common constants
pub mod constants;

/// Error types and handling for the mas application
pub mod error;

/// Full project generation sequence
pub mod generator;

/// Overwrite protection for non-empty destinations
pub mod guard;

/// Logger initialization
pub mod logger;

/// Package manifest construction
pub mod manifest;

/// Project name normalization
pub mod name;

/// Directory and template write planning
pub mod plan;

/// User input and interaction handling
pub mod prompt;

/// Template rendering
pub mod renderer;

/// Templates bundled into the binary
pub mod templates;

/// Filesystem writes with progress reporting
pub mod writer;
