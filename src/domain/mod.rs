//! Domain - value types and entities the simulation operates on

pub mod area;
pub mod body;
pub mod config;
pub mod fluid;
pub mod force;
pub mod shape;

pub use area::{Area, AreaEffect};
pub use body::{Body, Kinematics};
pub use config::{Boundaries, Boundary, WorldConfig};
pub use fluid::{fluid_bands, Fluid, FluidBand};
pub use force::Force;
pub use shape::{Shape, ShapeKind, ShapePair};
