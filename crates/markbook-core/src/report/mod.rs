pub mod csv;

use crate::aggregate::outcome::ResultTable;
use crate::model::Category;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Count of students in one performance band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// A (name, percentage) pair for ranked and highlighted views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedStudent {
    pub student_name: String,
    pub percentage: Decimal,
}

/// Summary statistics over a result table, consumed by report presenters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total_students: usize,
    /// Mean of all row percentages; 0 for an empty table.
    pub class_average: Decimal,
    /// One entry per band, best to worst, zero counts included.
    pub category_counts: Vec<CategoryCount>,
    /// Best rows by percentage, at most `top_n`.
    pub top_students: Vec<RankedStudent>,
    /// Weak-band rows in table order (students needing support).
    pub weak_students: Vec<RankedStudent>,
}

impl Summary {
    pub fn count_for(&self, category: Category) -> usize {
        self.category_counts
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

/// Compute summary statistics for a result table.
pub fn summarize(table: &ResultTable, top_n: usize) -> Summary {
    let total_students = table.rows.len();

    let class_average = if table.rows.is_empty() {
        Decimal::ZERO
    } else {
        let sum = table
            .rows
            .iter()
            .fold(Decimal::ZERO, |acc, row| acc + row.percentage);
        sum / Decimal::from(total_students as u64)
    };

    let category_counts = Category::ALL
        .iter()
        .map(|&category| CategoryCount {
            category,
            count: table.rows.iter().filter(|r| r.category == category).count(),
        })
        .collect();

    let top_students = table
        .sorted_by_percentage()
        .into_iter()
        .take(top_n)
        .map(|row| RankedStudent {
            student_name: row.student_name.clone(),
            percentage: row.percentage,
        })
        .collect();

    let weak_students = table
        .rows
        .iter()
        .filter(|row| row.category == Category::Weak)
        .map(|row| RankedStudent {
            student_name: row.student_name.clone(),
            percentage: row.percentage,
        })
        .collect();

    Summary {
        total_students,
        class_average,
        category_counts,
        top_students,
        weak_students,
    }
}
