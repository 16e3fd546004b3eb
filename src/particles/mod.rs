//! Visual particle effects: a fixed-size slot pool and the emission presets
//! built on top of it.

pub mod presets;
pub mod simulator;

pub use presets::Particles;
pub use simulator::{Particle, ParticleSimulator};
