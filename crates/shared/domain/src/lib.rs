//! # Domain Models
//!
//! This crate contains the pure domain types of the territorial-administration
//! HR platform with minimal dependencies (`serde`, `chrono`, `strum`).
//! Keep it lean: no I/O, no persistence, no orchestration—just data,
//! natural-key code derivation, and simple constructors.

pub mod code;
pub mod config;
pub mod corps;
pub mod geography;
pub mod position;
pub mod structure;
pub mod template;
