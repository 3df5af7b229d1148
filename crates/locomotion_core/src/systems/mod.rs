//! The two per-frame systems. The arbiter runs before the integrator so
//! movement is computed against this frame's look rotation.

pub mod locomotion;
pub mod rotation_arbiter;
