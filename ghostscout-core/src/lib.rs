//! GhostScout Core — acquisition steps, step orchestration, Sportec loader.
//!
//! This crate contains everything behind the two CLI entry points:
//! - Configuration for the on-disk data layout and the acquisition sources
//! - The catalog fetch/filter step (StatsBomb 360)
//! - The mirror-by-clone steps (Metrica Sports, SkillCorner)
//! - The SoccerNet informational step
//! - The fixed-sequence download orchestrator with per-step fault policies
//! - The Sportec event/metadata loader and schema prober

pub mod config;
pub mod data;
pub mod sportec;
