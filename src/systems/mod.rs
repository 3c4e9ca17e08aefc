//! Per-tick systems: forces, moves, collision detection and response

pub mod collision;
pub mod context;
pub mod forces;
pub mod kinematics;
pub mod resolution;

pub use collision::{detect_collision, detect_edge_collision, CollisionKind, CollisionReport};
pub use context::WorldContext;
pub use resolution::{handle_collision, ImpulseLaw, MoverRebound};
