// 🧑‍💼 Employee Entity - Comparable staff record
//
// A value type: no identity beyond its four fields. Two employees are
// equal iff every field matches exactly (case-sensitive, no trimming).

use serde::{Deserialize, Serialize};

// ============================================================================
// EMPLOYEE RECORD
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
    pub job: String,
    /// Department, e.g. "java"
    pub dept: String,
}

impl Employee {
    /// Create new employee record
    pub fn new(first_name: String, last_name: String, job: String, dept: String) -> Self {
        Employee {
            first_name,
            last_name,
            job,
            dept,
        }
    }

    /// Field-wise equality (same as `==`)
    pub fn equals(&self, other: &Employee) -> bool {
        self == other
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sam() -> Employee {
        Employee::new(
            "sam".to_string(),
            "malone".to_string(),
            "SE".to_string(),
            "java".to_string(),
        )
    }

    #[test]
    fn test_employee_creation() {
        let emp = sam();

        assert_eq!(emp.first_name, "sam");
        assert_eq!(emp.last_name, "malone");
        assert_eq!(emp.job, "SE");
        assert_eq!(emp.dept, "java");
        assert_eq!(emp.full_name(), "sam malone");
    }

    #[test]
    fn test_equals_reflexive() {
        let emp = sam();
        assert!(emp.equals(&emp));
        assert!(emp.equals(&emp.clone()));
    }

    #[test]
    fn test_equals_symmetric_and_transitive() {
        let a = sam();
        let b = sam();
        let c = sam();

        assert!(a.equals(&b) && b.equals(&a));
        assert!(a.equals(&b) && b.equals(&c) && a.equals(&c));
    }

    #[test]
    fn test_equals_case_sensitive() {
        let mut other = sam();
        other.dept = "Java".to_string();

        assert!(!sam().equals(&other));
        assert_ne!(sam(), other);
    }

    #[test]
    fn test_equals_no_trimming() {
        let mut other = sam();
        other.job = "SE ".to_string();

        assert!(!sam().equals(&other));
    }

    #[test]
    fn test_each_field_participates() {
        let base = sam();

        let mut e = base.clone();
        e.first_name = "x".to_string();
        assert!(!base.equals(&e));

        let mut e = base.clone();
        e.last_name = "x".to_string();
        assert!(!base.equals(&e));

        let mut e = base.clone();
        e.job = "x".to_string();
        assert!(!base.equals(&e));

        let mut e = base.clone();
        e.dept = "x".to_string();
        assert!(!base.equals(&e));
    }

    #[test]
    fn test_different_employees() {
        let amritesh = Employee::new(
            "amritesh".to_string(),
            "Kumar".to_string(),
            "SE".to_string(),
            "Java".to_string(),
        );

        assert!(!sam().equals(&amritesh));
    }

    #[test]
    fn test_employee_json_roundtrip_preserves_equality() {
        let emp = sam();
        let json = serde_json::to_string(&emp).unwrap();
        let back: Employee = serde_json::from_str(&json).unwrap();

        assert_eq!(emp, back);
    }
}
