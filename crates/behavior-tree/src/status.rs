//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// # Frame-based Semantics
///
/// The tree is re-evaluated from the root every frame:
/// - Conditions evaluate immediately (e.g., "Is the enemy visible?")
/// - Instant actions succeed or fail in the same frame (e.g., "Fire")
/// - Long-running actions report `Running` until they finish (e.g., "Move to destination")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action executed without errors.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be executed (e.g., no enemy to shoot at).
    Failure,

    /// The behavior is still in progress and should be ticked again next frame.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Inverts the status: Success becomes Failure and vice versa.
    ///
    /// `Running` is left untouched; an unfinished task has no result to negate.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }

    /// Maps a predicate result to a status.
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        if value { Status::Success } else { Status::Failure }
    }
}

impl From<bool> for Status {
    fn from(value: bool) -> Self {
        Status::from_bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_keeps_running() {
        assert_eq!(Status::Success.invert(), Status::Failure);
        assert_eq!(Status::Failure.invert(), Status::Success);
        assert_eq!(Status::Running.invert(), Status::Running);
    }

    #[test]
    fn bool_conversion() {
        assert_eq!(Status::from(true), Status::Success);
        assert_eq!(Status::from(false), Status::Failure);
    }
}
