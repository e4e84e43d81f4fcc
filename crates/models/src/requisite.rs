use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single prerequisite declaration on a dependent course.
///
/// Requirements sharing the same group id on one course form an OR-set:
/// satisfying any member satisfies the whole group. Requirements without a
/// group id are individually mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requisite {
    /// Course code that must be satisfied.
    pub target: String,
    /// OR-group identifier, if any.
    pub group: Option<String>,
    /// Declared minimum grade. The plan input carries no grade data, so this
    /// is treated as presence-only and never grade-checked.
    pub min_grade: Option<String>,
    /// Whether the target may be taken in the same term as the dependent
    /// course.
    pub concurrent: bool,
}

impl Requisite {
    /// A mandatory (ungrouped, non-concurrent) requirement on `target`.
    pub fn required(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            group: None,
            min_grade: None,
            concurrent: false,
        }
    }

    /// A requirement belonging to the OR-group `group`.
    pub fn grouped(target: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            ..Self::required(target)
        }
    }

    /// Allow the target to be scheduled concurrently with the dependent
    /// course.
    pub fn concurrent(mut self) -> Self {
        self.concurrent = true;
        self
    }

    /// Set the declared minimum grade.
    pub fn min_grade(mut self, grade: impl Into<String>) -> Self {
        self.min_grade = Some(grade.into());
        self
    }

    /// Whether this requirement is met for `dependent` given the courses
    /// committed in strictly earlier slots (`prior`) and the courses
    /// scheduled in the same slot (`current`).
    ///
    /// A course never satisfies its own requirement: a self-referencing
    /// target stays unmet even when concurrent-allowed, which keeps cyclic
    /// declarations structurally unsatisfiable.
    pub fn is_met(
        &self,
        dependent: &str,
        prior: &HashSet<&str>,
        current: &HashSet<&str>,
    ) -> bool {
        if prior.contains(self.target.as_str()) {
            return true;
        }

        self.concurrent && self.target != dependent && current.contains(self.target.as_str())
    }
}

/// Partition a course's requisites into individually mandatory checks and
/// OR-groups, preserving declaration order.
pub fn partition<'a>(
    requisites: &'a [Requisite],
) -> (Vec<&'a Requisite>, Vec<(&'a str, Vec<&'a Requisite>)>) {
    let mut mandatory = Vec::new();
    let mut groups: Vec<(&str, Vec<&Requisite>)> = Vec::new();

    for requisite in requisites {
        match &requisite.group {
            None => mandatory.push(requisite),
            Some(id) => match groups.iter_mut().find(|(group, _)| group == id) {
                Some((_, members)) => members.push(requisite),
                None => groups.push((id.as_str(), vec![requisite])),
            },
        }
    }

    (mandatory, groups)
}
