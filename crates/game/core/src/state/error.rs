//! State management errors.

/// Errors that occur during simulation-state mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Agent roster is full (max capacity reached).
    #[error("agent roster is full (max: {max})")]
    AgentListFull { max: usize },
}
