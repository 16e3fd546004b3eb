//! Flappberry - flappy-style arcade simulation core.
//!
//! The library holds everything that runs without a terminal: entities,
//! physics, obstacle generation, collision and scoring, the particle pool,
//! and the frame loop. Drawing, audio and persistence are reached through
//! collaborator traits so hosts and tests can plug in their own.

pub mod audio;
pub mod build_info;
pub mod config;
pub mod constants;
pub mod entities;
pub mod game;
pub mod geometry;
pub mod particles;
pub mod render;
pub mod score;
pub mod simulator;
pub mod utils;
