//! Shared utilities for the QR Desk project.
//!
//! This crate contains build metadata helpers that are shared across the
//! workspace, primarily for the version label in the `ui` crate.

pub mod version_info;
