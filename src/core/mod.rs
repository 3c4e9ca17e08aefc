//! Core - geometry kernel and shared error type

pub mod aabb;
pub mod error;
pub mod geometry;
pub mod vec2;

pub use aabb::Aabb;
pub use error::EngineError;
pub use vec2::{Point, Vec2};
