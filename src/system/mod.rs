//! # System Interaction Layer
//!
//! Boundary between the core chain engine and the operating system. The only
//! resident here is the process executor; everything above it reasons in
//! terms of step names and exit codes.

pub mod executor;
