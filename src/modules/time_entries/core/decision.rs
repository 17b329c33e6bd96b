use crate::modules::time_entries::core::time_entry::TimeEntry;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("end time must be after start time")]
    InvalidInterval,

    #[error("duration must not be negative")]
    NegativeDuration,

    #[error("duration must not exceed {0} minutes")]
    DurationTooLarge(i64),

    #[error("date is out of range")]
    DateOutOfRange,

    #[error("no open timer for this user, project and task")]
    NoOpenTimer,

    #[error("no running timer to pause for this user, project and task")]
    NoRunningTimer,

    #[error("no paused timer to resume for this user, project and task")]
    NoPausedTimer,

    #[error("time entry {0} not found")]
    EntryNotFound(String),
}

impl DecideError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DecideError::NoOpenTimer
                | DecideError::NoRunningTimer
                | DecideError::NoPausedTimer
                | DecideError::EntryNotFound(_)
        )
    }
}

/// Outcome of a pure decide function: the write to perform, or why not.
#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Insert {
        entry: TimeEntry,
    },
    Replace {
        expected_version: i64,
        entry: TimeEntry,
    },
    Rejected {
        reason: DecideError,
    },
}

impl Decision {
    pub fn rejected(reason: DecideError) -> Self {
        Decision::Rejected { reason }
    }

    /// Replace `current` with `next`, conditioned on the revision that was read.
    pub fn replace(current: &TimeEntry, next: TimeEntry) -> Self {
        Decision::Replace {
            expected_version: current.version,
            entry: next,
        }
    }
}

#[cfg(test)]
mod decision_tests {
    use super::*;
    use crate::tests::fixtures::entries::{at, running_entry};
    use rstest::rstest;

    #[rstest]
    #[case(DecideError::NoOpenTimer, true)]
    #[case(DecideError::NoRunningTimer, true)]
    #[case(DecideError::NoPausedTimer, true)]
    #[case(DecideError::EntryNotFound("te-1".into()), true)]
    #[case(DecideError::MissingField("userId"), false)]
    #[case(DecideError::InvalidInterval, false)]
    #[case(DecideError::NegativeDuration, false)]
    #[case(DecideError::DurationTooLarge(60), false)]
    #[case(DecideError::DateOutOfRange, false)]
    fn it_should_classify_not_found_reasons(#[case] reason: DecideError, #[case] expected: bool) {
        assert_eq!(reason.is_not_found(), expected);
    }

    #[rstest]
    fn it_should_condition_replace_on_the_read_version() {
        let mut current = running_entry(at(9, 0));
        current.version = 4;
        let decision = Decision::replace(&current, current.clone());
        assert!(matches!(
            decision,
            Decision::Replace {
                expected_version: 4,
                ..
            }
        ));
    }

    #[rstest]
    fn it_should_render_a_readable_message() {
        assert_eq!(
            DecideError::MissingField("taskId").to_string(),
            "taskId is required"
        );
    }
}
