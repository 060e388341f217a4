//! Procedural generation core for the cylinder field scene.
//!
//! Main components:
//! - [`grid`] — square grid planning for cylinder placement.
//! - [`field`] — randomised cylinder generation, one per grid cell.
//! - [`solid`] / [`csg`] — closed solids and BSP boolean operations.
//! - [`ring`] — boundary ring carved by boolean subtraction.
//! - [`mesh_data`] — triangulation and manifold validation of solids.
//! - [`color`] — per-cylinder random colours and the ring gradient.
//! - [`scene`] — one-shot generation pass combining the components.
//!
//! The crate is renderer-agnostic: it emits value objects and raw mesh
//! data which the render engine turns into GPU resources. All randomness
//! flows through an explicit `rand::Rng` parameter so a seeded source
//! reproduces a scene exactly.

pub mod color;
pub mod csg;
pub mod error;
pub mod field;
pub mod grid;
pub mod mesh_data;
pub mod params;
pub mod ring;
pub mod scene;
pub mod solid;
