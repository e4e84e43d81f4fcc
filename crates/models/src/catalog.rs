use crate::requisite::Requisite;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single course as loaded from the catalog store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Unique course code, e.g. "CS 2100".
    pub code: String,
    pub title: String,
    /// Credit weight, a positive integer.
    pub credits: u32,
    pub department: String,
    /// Numeric level, e.g. 2000.
    pub level: i32,
    /// Terms the course is typically offered in.
    pub offered_terms: Vec<String>,
}

/// Immutable snapshot of catalog data for one validation run.
///
/// The engine only reads from the snapshot; refreshing it is the catalog
/// store's job. Concurrent validation runs can share a snapshot freely
/// because nothing here mutates after loading.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    courses: HashMap<String, CourseRecord>,
    requisites: HashMap<String, Vec<Requisite>>,
}

impl CatalogSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_course(&mut self, course: CourseRecord) {
        self.courses.insert(course.code.clone(), course);
    }

    /// Append a prerequisite declaration to the dependent course `code`.
    /// Declaration order is preserved.
    pub fn insert_requisite(&mut self, code: impl Into<String>, requisite: Requisite) {
        self.requisites.entry(code.into()).or_default().push(requisite);
    }

    /// Look up a course by code. An unknown code is a normal outcome (e.g.
    /// transfer credit not yet in the catalog), not an error.
    pub fn course(&self, code: &str) -> Option<&CourseRecord> {
        self.courses.get(code)
    }

    /// Prerequisite declarations for a course, in declaration order.
    pub fn requisites(&self, code: &str) -> &[Requisite] {
        self.requisites.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Credit weight for a course, or `default` when the course is unknown.
    pub fn credits_or(&self, code: &str, default: u32) -> u32 {
        self.course(code).map(|course| course.credits).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
