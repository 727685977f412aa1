//! Physics simulation powered by `rapier`.
//!
//! The [`PhysicsManager`] owns every rigid body and collider of the scene
//! and advances the world once per frame. Gravity is always zero; bodies
//! only move through impulses, contacts and kinematic targets.

pub mod simulator;

pub use simulator::*;
