use crate::utils::util::format_salary;
use serde::{Deserialize, Serialize, Serializer};

/// One employee as built in memory before it is written out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub name: String,
    pub age: u32,
    #[serde(serialize_with = "serialize_salary")]
    pub salary: f64,
}

impl Employee {
    pub fn new(name: impl Into<String>, age: u32, salary: f64) -> Self {
        Self {
            name: name.into(),
            age,
            salary,
        }
    }
}

fn serialize_salary<S: Serializer>(salary: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_salary(*salary))
}

/// The string-typed form of an employee after it has been parsed back from a roster file.
///
/// Fields hold the text found on disk, unvalidated and untrimmed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployeeRow {
    pub name: String,
    pub age: String,
    pub salary: String,
}

impl EmployeeRow {
    pub fn new(name: impl Into<String>, age: impl Into<String>, salary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            salary: salary.into(),
        }
    }
}

pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee::new("Tobias Miller", 33, 55492.34),
        Employee::new("Helen Bayer", 47, 75432.12),
        Employee::new("Abby Recker", 22, 33761.85),
        Employee::new("Mike Smith", 63, 129106.41),
        Employee::new("Mike Adams", 52, 87430.27),
        Employee::new("Bethany Thompson", 29, 62497.36),
    ]
}
