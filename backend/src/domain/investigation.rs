//! Investigation workflow: a small status machine over listing checks.
//!
//! Transitions happen only on explicit investigator action; there are no
//! timers or automatic moves. `Completed` and `Rejected` are terminal.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::user::UserId;

/// Workflow status of an investigation request.
///
/// Legal transitions: `Pending -> InProgress`, `InProgress -> Completed`,
/// and `Pending -> Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum InvestigationStatus {
    /// Requested but not yet picked up.
    Pending,
    /// An investigator is working the request.
    InProgress,
    /// Investigation finished with findings.
    Completed,
    /// Request declined without investigation.
    Rejected,
}

impl InvestigationStatus {
    /// Whether the status admits no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Rejected)
    }

    /// Whether moving from `self` to `target` is a legal transition.
    pub fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::InProgress)
                | (Self::InProgress, Self::Completed)
                | (Self::Pending, Self::Rejected)
        )
    }

    /// Apply a transition, returning the new status or a typed error.
    pub fn apply(self, target: Self) -> Result<Self, InvestigationTransitionError> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(InvestigationTransitionError {
                from: self,
                to: target,
            })
        }
    }

    /// Stable kebab-case name used on the wire and in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for InvestigationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when a status move is not in the transition relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvestigationTransitionError {
    /// Status the investigation currently holds.
    pub from: InvestigationStatus,
    /// Status the caller asked for.
    pub to: InvestigationStatus,
}

impl fmt::Display for InvestigationTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot move investigation from {} to {}", self.from, self.to)
    }
}

impl std::error::Error for InvestigationTransitionError {}

/// Confidence score assigned to a completed investigation, `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "u32", into = "u32")]
pub struct Score(u32);

impl Score {
    /// Validate and construct a [`Score`].
    pub fn new(value: u32) -> Result<Self, ScoreOutOfRange> {
        if value > 100 {
            return Err(ScoreOutOfRange { value });
        }
        Ok(Self(value))
    }

    /// The raw score value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<Score> for u32 {
    fn from(value: Score) -> Self {
        value.0
    }
}

impl TryFrom<u32> for Score {
    type Error = ScoreOutOfRange;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Error raised when a score falls outside `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreOutOfRange {
    /// The offending value.
    pub value: u32,
}

impl fmt::Display for ScoreOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "score {} is outside 0..=100", self.value)
    }
}

impl std::error::Error for ScoreOutOfRange {}

/// An investigation request against one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Investigation {
    /// Stable identifier for the request.
    #[schema(value_type = String)]
    pub id: Uuid,
    /// Listing the request targets.
    #[schema(value_type = String)]
    pub property_id: Uuid,
    /// Investigator the request is assigned to.
    #[schema(value_type = String)]
    pub investigator_id: UserId,
    /// Workflow status.
    pub status: InvestigationStatus,
    /// When the request was raised.
    #[schema(value_type = String, format = DateTime)]
    pub request_date: DateTime<Utc>,
    /// When the request reached `completed`, if it has.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub completion_date: Option<DateTime<Utc>>,
    /// Findings recorded so far, one entry per observation.
    pub findings: Vec<String>,
    /// Confidence score; meaningful once completed.
    #[schema(value_type = u32, maximum = 100)]
    pub score: Score,
}

impl Investigation {
    /// Move the investigation to `target`, stamping the completion date when
    /// the move lands on [`InvestigationStatus::Completed`].
    pub fn transition(
        &mut self,
        target: InvestigationStatus,
        now: DateTime<Utc>,
    ) -> Result<(), InvestigationTransitionError> {
        self.status = self.status.apply(target)?;
        if self.status == InvestigationStatus::Completed {
            self.completion_date = Some(now);
        }
        Ok(())
    }
}
