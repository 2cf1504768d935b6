//! Rendering cut results for the terminal

use besquare_core::domain::CutErrorKind;
use besquare_core::{CutError, CutReport, Rectangle, Result};
use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Why a material was not cut
#[derive(Debug, Serialize)]
pub struct Rejection {
    pub kind: CutErrorKind,
    pub message: String,
}

impl From<&CutError> for Rejection {
    fn from(err: &CutError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Result of submitting one material
#[derive(Debug, Serialize)]
pub struct CutOutcome {
    pub material: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<CutReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Rejection>,
}

/// Everything one invocation produced
#[derive(Debug, Serialize)]
pub struct Summary {
    pub square_size: i64,
    pub cuts: Vec<CutOutcome>,
    pub squares: Vec<Rectangle>,
}

impl Summary {
    pub fn rejected(&self) -> usize {
        self.cuts.iter().filter(|cut| cut.error.is_some()).count()
    }
}

#[derive(Tabled)]
struct CutRow {
    material: String,
    grid: String,
    squares: String,
    discarded: String,
    status: String,
}

impl From<&CutOutcome> for CutRow {
    fn from(cut: &CutOutcome) -> Self {
        match (&cut.report, &cut.error) {
            (Some(report), _) => Self {
                material: cut.material.clone(),
                grid: format!("{}x{}", report.columns, report.rows),
                squares: report.squares_added.to_string(),
                discarded: report.discarded_tiles.to_string(),
                status: "OK".to_string(),
            },
            (None, error) => Self {
                material: cut.material.clone(),
                grid: "-".to_string(),
                squares: "0".to_string(),
                discarded: "-".to_string(),
                status: error
                    .as_ref()
                    .map(|rejection| rejection.kind.to_string())
                    .unwrap_or_default(),
            },
        }
    }
}

pub fn render_json(summary: &Summary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

pub fn render_table(summary: &Summary) -> String {
    let rows: Vec<CutRow> = summary.cuts.iter().map(CutRow::from).collect();
    Table::new(rows).to_string()
}

pub fn print_table(summary: &Summary) {
    println!(
        "{}",
        format!("Square size: {}", summary.square_size).cyan().bold()
    );
    println!();
    println!("{}", render_table(summary));
    println!();

    for cut in &summary.cuts {
        if let Some(rejection) = &cut.error {
            println!("  {} {}: {}", "✗".red(), cut.material, rejection.message);
        }
    }

    println!(
        "  {} {} squares ready for delivery",
        "✓".green(),
        summary.squares.len()
    );
    if summary.rejected() > 0 {
        println!(
            "  {} {} materials rejected",
            "!".yellow(),
            summary.rejected()
        );
    }
}
