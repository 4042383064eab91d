//! Mass-spring cloth for real-time rendering.
//!
//! `clothy` simulates a square sheet of point masses joined by structural,
//! shear and bend springs, hanging from two anchored corners and draped over a
//! sphere the user can steer. Everything a renderer needs comes out of one
//! call: [`Cloth::step`] takes the frame time and a [`SphereDirection`] and
//! returns the new positions and vertex normals.
//!
//! # Features
//!
//! - **Grid topology**: `resolution²` points, three spring families, triangle index buffer
//! - **Interchangeable integrators**: position relaxation, force-based Euler, plain Euler, Verlet
//! - **Sphere collision**: penetrating points are projected to the surface
//! - **Anchors**: pinned points are restored after every relaxation pass
//! - **Vertex normals**: rebuilt once per frame with a defined edge policy
//! - **Deterministic**: fixed sub-step count by default, fixed spring order
//! - **Observable**: Monitor solver passes via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point;
pub mod spring;
pub mod grid;
pub mod anchor;
pub mod collider;
pub mod integrator;
pub mod normals;
pub mod motion;
pub mod timestep;
pub mod cloth;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use point::GridPoint;
pub use spring::{Spring, SpringKind};
pub use grid::{Topology, triangle_indices};
pub use anchor::{Anchor, AnchorSet};
pub use collider::SphereCollider;
pub use integrator::IntegrationMode;
pub use motion::{SphereController, SphereDirection};
pub use timestep::{StepClock, SubSteps};
pub use cloth::{Cloth, FrameOutput};
pub use config::ClothConfig;
pub use observer::{StepObserver, NoOpStepObserver, StepStats};
pub use error::ClothError;
