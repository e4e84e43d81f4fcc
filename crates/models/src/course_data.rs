use crate::catalog::CourseRecord;
use crate::requisite::Requisite;
use serde::{Deserialize, Serialize};

/// Interchange representation of one catalog course, as produced by the
/// scrapers and consumed by the loader binaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseData {
    pub course_code: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub credits: u32,
    pub department: String,
    pub level: i32,
    /// Terms the course is typically offered in.
    #[serde(default)]
    pub semesters: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<PrerequisiteData>,
}

impl CourseData {
    /// The catalog-model view of this course.
    pub fn record(&self) -> CourseRecord {
        CourseRecord {
            code: self.course_code.clone(),
            title: self.title.clone(),
            credits: self.credits,
            department: self.department.clone(),
            level: self.level,
            offered_terms: self.semesters.clone(),
        }
    }
}

/// One prerequisite declaration in the interchange format.
///
/// The scraped feeds usually carry a bare course code; richer declarations
/// spell out grouping, minimum grade, and concurrency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrerequisiteData {
    Code(String),
    #[serde(rename_all = "camelCase")]
    Full {
        target: String,
        #[serde(default)]
        group: Option<String>,
        #[serde(default)]
        min_grade: Option<String>,
        #[serde(default)]
        concurrent: bool,
    },
}

impl From<PrerequisiteData> for Requisite {
    fn from(data: PrerequisiteData) -> Self {
        match data {
            PrerequisiteData::Code(target) => Requisite::required(target),
            PrerequisiteData::Full {
                target,
                group,
                min_grade,
                concurrent,
            } => Requisite {
                target,
                group,
                min_grade,
                concurrent,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scraper_output() {
        let raw = r#"{
            "courseCode": "CS 2100",
            "title": "Data Structures and Algorithms I",
            "description": "Introduction to data structures and algorithms",
            "credits": 3,
            "department": "CS",
            "level": 2000,
            "prerequisites": ["CS 1110"],
            "semesters": ["Fall", "Spring"]
        }"#;

        let course: CourseData = serde_json::from_str(raw).unwrap();
        assert_eq!(course.course_code, "CS 2100");
        assert_eq!(course.credits, 3);
        assert_eq!(
            course.prerequisites,
            vec![PrerequisiteData::Code("CS 1110".to_string())]
        );

        let record = course.record();
        assert_eq!(record.code, "CS 2100");
        assert_eq!(record.offered_terms, vec!["Fall", "Spring"]);
    }

    #[test]
    fn test_parse_structured_prerequisite() {
        let raw = r#"{
            "courseCode": "CS 3240",
            "title": "Software Engineering",
            "credits": 3,
            "department": "CS",
            "level": 3000,
            "prerequisites": [
                {"target": "CS 2100", "group": "ds", "concurrent": false},
                {"target": "CS 2110", "group": "ds"},
                {"target": "CS 2120", "minGrade": "C-", "concurrent": true}
            ]
        }"#;

        let course: CourseData = serde_json::from_str(raw).unwrap();
        assert_eq!(course.prerequisites.len(), 3);

        let requisites: Vec<Requisite> = course
            .prerequisites
            .into_iter()
            .map(Requisite::from)
            .collect();

        assert_eq!(requisites[0].group.as_deref(), Some("ds"));
        assert_eq!(requisites[1].group.as_deref(), Some("ds"));
        assert_eq!(requisites[2].min_grade.as_deref(), Some("C-"));
        assert!(requisites[2].concurrent);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let raw = r#"{
            "courseCode": "APMA 1110",
            "title": "Single Variable Calculus",
            "credits": 4,
            "department": "APMA",
            "level": 1000
        }"#;

        let course: CourseData = serde_json::from_str(raw).unwrap();
        assert!(course.description.is_none());
        assert!(course.semesters.is_empty());
        assert!(course.prerequisites.is_empty());
    }
}
