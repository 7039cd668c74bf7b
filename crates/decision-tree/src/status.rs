//! Status returned by decision tree nodes.

use std::fmt;

/// The result of evaluating a node for one tick.
///
/// # Tick Semantics
///
/// A node may need several ticks to reach a verdict:
/// - Conditions usually answer immediately (e.g., "Is an enemy visible?")
/// - Actions may take several frames (e.g., "Walk to the door") and report
///   `Running` until they are done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The node completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action finished.
    Success,

    /// The node has not finished yet.
    ///
    /// The node must be ticked again on the next tick and will pick up
    /// where it left off.
    Running,

    /// The node failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be carried out.
    Failure,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` for `Success` and `Failure`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }

    /// Inverts the status: Success becomes Failure and vice versa.
    ///
    /// `Running` is left untouched since the verdict is not known yet.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }

    /// Textual outcome used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            Status::Success => "succeeded",
            Status::Running => "is running",
            Status::Failure => "failed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
