// 🎬 Demo - builds the sample entities and writes the report
//
// Text output is one line per result:
//   blacked shoe of size 7 with laces
//   whiteed shoe of size 6 without laces
//   false

use crate::entities::{Employee, Shoe};
use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::io::Write;

/// Sample shoes: one laced, one without laces
pub fn demo_shoes() -> Vec<Shoe> {
    vec![
        Shoe::new("black".to_string(), 7, true),
        Shoe::new("white".to_string(), 6, false),
    ]
}

/// Sample employees: same job, different names, dept differs only by case
pub fn demo_employees() -> (Employee, Employee) {
    let emp1 = Employee::new(
        "sam".to_string(),
        "malone".to_string(),
        "SE".to_string(),
        "java".to_string(),
    );
    let emp2 = Employee::new(
        "amritesh".to_string(),
        "Kumar".to_string(),
        "SE".to_string(),
        "Java".to_string(),
    );
    (emp1, emp2)
}

/// JSON report shape
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub shoes: Vec<ShoeView>,
    pub employees: Vec<EmployeeView>,
    pub employees_equal: bool,
}

#[derive(Debug, Serialize)]
pub struct EmployeeView {
    #[serde(flatten)]
    pub employee: Employee,
    pub full_name: String,
}

impl From<Employee> for EmployeeView {
    fn from(employee: Employee) -> Self {
        EmployeeView {
            full_name: employee.full_name(),
            employee,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ShoeView {
    #[serde(flatten)]
    pub shoe: Shoe,
    pub description: String,
}

impl DemoReport {
    pub fn build() -> Self {
        let shoes = demo_shoes()
            .into_iter()
            .map(|shoe| ShoeView {
                description: shoe.describe(),
                shoe,
            })
            .collect();
        let (emp1, emp2) = demo_employees();
        let employees_equal = emp1.equals(&emp2);

        DemoReport {
            shoes,
            employees: vec![emp1.into(), emp2.into()],
            employees_equal,
        }
    }
}

/// Write the plain-text report
pub fn run_text<W: Write>(out: &mut W) -> Result<()> {
    for shoe in demo_shoes() {
        writeln!(out, "{}", shoe).context("Failed to write shoe description")?;
    }

    let (emp1, emp2) = demo_employees();
    writeln!(out, "{}", emp1.equals(&emp2)).context("Failed to write equality result")?;

    Ok(())
}

/// Write the report as pretty-printed JSON
pub fn run_json<W: Write>(out: &mut W) -> Result<()> {
    let report = DemoReport::build();
    serde_json::to_writer_pretty(&mut *out, &report).context("Failed to serialize report")?;
    writeln!(out).context("Failed to write report")?;
    Ok(())
}

/// Dispatch on the CLI mode: `None` or "text" for text, "json" for JSON
pub fn run<W: Write>(mode: Option<&str>, out: &mut W) -> Result<()> {
    match mode {
        None | Some("text") => run_text(out),
        Some("json") => run_json(out),
        Some(other) => bail!("Unknown mode: {}", other),
    }
}
