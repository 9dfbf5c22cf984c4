//! Task — scheduled work (rehearsal, gig, recording) that needs specific
//! band members to be present.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::TaskId;

/// A unit of work scheduled for a band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub required_members: Vec<String>,
}

impl Task {
    /// Evaluate whether `members` covers everything this task requires.
    ///
    /// Missing members are reported in the order the task lists them.
    #[must_use]
    pub fn readiness(&self, members: &[String]) -> Readiness {
        let missing: Vec<String> = self
            .required_members
            .iter()
            .filter(|required| !members.contains(required))
            .cloned()
            .collect();

        if missing.is_empty() {
            Readiness::Ready
        } else {
            Readiness::NotReady { missing }
        }
    }
}

/// Outcome of a readiness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    NotReady { missing: Vec<String> },
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => f.write_str("READY"),
            Self::NotReady { missing } => write!(f, "NOT READY: missing {}", missing.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rehearsal(required: &[&str]) -> Task {
        Task {
            id: TaskId::new(1),
            title: "Rehearsal".to_string(),
            required_members: required.iter().map(ToString::to_string).collect(),
        }
    }

    fn members(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn should_be_ready_when_all_required_members_present() {
        let task = rehearsal(&["Ann", "Bob"]);
        let readiness = task.readiness(&members(&["Bob", "Ann", "Cid"]));
        assert_eq!(readiness, Readiness::Ready);
        assert_eq!(readiness.to_string(), "READY");
    }

    #[test]
    fn should_be_ready_when_nothing_is_required() {
        let task = rehearsal(&[]);
        assert_eq!(task.readiness(&[]), Readiness::Ready);
    }

    #[test]
    fn should_list_missing_members_in_task_order() {
        let task = rehearsal(&["Drums", "Ann", "Bass"]);
        let readiness = task.readiness(&members(&["Ann"]));
        assert_eq!(readiness.to_string(), "NOT READY: missing Drums, Bass");
    }

    #[test]
    fn should_default_required_members_when_absent_from_json() {
        let task: Task = serde_json::from_str(r#"{"id":3,"title":"Gig"}"#).unwrap();
        assert!(task.required_members.is_empty());
    }
}
