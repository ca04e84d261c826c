//! Pure Pong simulation: entities, collision, scoring, and the match
//! state machine. No windowing, no I/O — each frame's key states and
//! the current time arrive as plain data, so the whole crate is
//! deterministic and testable.

pub mod ball;
pub mod config;
pub mod geometry;
pub mod opponent;
pub mod paddle;
pub mod resources;
pub mod session;

pub use ball::*;
pub use config::*;
pub use geometry::*;
pub use paddle::*;
pub use resources::*;
pub use session::*;
