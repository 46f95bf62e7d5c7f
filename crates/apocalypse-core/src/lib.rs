//! Core types and definitions for the APOCALYPSE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entity records, commands, configuration, events, report shapes, and
//! constants. It has no dependency on any runtime framework and no
//! knowledge of rendering.

pub mod collaborators;
pub mod commands;
pub mod config;
pub mod constants;
pub mod entities;
pub mod enums;
pub mod events;
pub mod report;
pub mod score;
pub mod types;
