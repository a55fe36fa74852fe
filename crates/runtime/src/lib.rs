//! Runtime orchestration for the deterministic stealth simulation.
//!
//! This crate wires level content and the pure simulation core into a
//! per-frame API. Consumers embed a [`Session`], feed it the player pose
//! every frame, and render the [`Frame`] it returns.
pub mod session;

pub use session::{Frame, Session, SessionError};
