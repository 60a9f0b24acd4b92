//! Ready-made content layouts built from a table.

use chrono::NaiveDateTime;

use super::table::Table;
use crate::content::{ContentMapping, SectionContent};

const KEY_COLUMN_LIMIT: usize = 6;

/// Sections for a quick report: record counts, the leading columns and a
/// short summary.
///
/// Produces `Data Overview`, `Key Columns` (first six headers) and
/// `Data Summary`.
pub fn overview_content(table: &Table, generated_at: NaiveDateTime) -> ContentMapping {
    let stats = table.stats();

    ContentMapping::new()
        .with(
            "Data Overview",
            SectionContent::bullets([
                format!("Total Records: {}", stats.rows),
                format!("Total Fields: {}", stats.columns),
                format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M")),
            ]),
        )
        .with(
            "Key Columns",
            SectionContent::bullets(table.columns().iter().take(KEY_COLUMN_LIMIT)),
        )
        .with(
            "Data Summary",
            SectionContent::key_values([
                ("Rows", stats.rows),
                ("Columns", stats.columns),
                ("Data Types", stats.data_types),
            ]),
        )
}

/// Sections for the full analysis report, including data quality figures.
///
/// Produces `Executive Summary`, `Column Analysis` (every header),
/// `Data Quality` and `Insights`.
pub fn workflow_content(
    table: &Table,
    dataset_name: &str,
    processed_at: NaiveDateTime,
) -> ContentMapping {
    let stats = table.stats();

    ContentMapping::new()
        .with(
            "Executive Summary",
            SectionContent::bullets([
                format!("Dataset: {}", dataset_name),
                format!("Total Records: {}", stats.rows),
                format!("Total Fields: {}", stats.columns),
            ]),
        )
        .with("Column Analysis", SectionContent::bullets(table.columns()))
        .with(
            "Data Quality",
            SectionContent::key_values([
                ("Complete Records", stats.complete_records),
                ("Missing Values", stats.missing_values),
                ("Duplicate Rows", stats.duplicate_rows),
            ]),
        )
        .with(
            "Insights",
            SectionContent::bullets([
                "Data has been analyzed and loaded successfully".to_string(),
                format!("Processing completed at {}", processed_at.format("%H:%M:%S")),
                "Ready for presentation".to_string(),
            ]),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{DeckSpec, ThemeColor, build};
    use crate::summary::CellValue;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
    }

    fn wide_table() -> Table {
        let columns: Vec<String> = (1..=8).map(|i| format!("col{}", i)).collect();
        let full: Vec<CellValue> = (0..8).map(CellValue::Int).collect();
        let mut sparse = full.clone();
        sparse[3] = CellValue::Empty;
        Table::from_rows(columns, vec![full.clone(), sparse, full]).unwrap()
    }

    #[test]
    fn test_overview_content() {
        let content = overview_content(&wide_table(), at());

        let titles: Vec<&str> = content.sections().map(|(t, _)| t).collect();
        assert_eq!(titles, vec!["Data Overview", "Key Columns", "Data Summary"]);
        assert_eq!(
            content.get("Data Overview"),
            Some(&SectionContent::bullets([
                "Total Records: 3",
                "Total Fields: 8",
                "Generated: 2024-03-07 14:05",
            ]))
        );
        assert_eq!(
            content.get("Key Columns"),
            Some(&SectionContent::bullets(["col1", "col2", "col3", "col4", "col5", "col6"]))
        );
        assert_eq!(
            content.get("Data Summary"),
            Some(&SectionContent::key_values([("Rows", 3), ("Columns", 8), ("Data Types", 2)]))
        );
    }

    #[test]
    fn test_workflow_content() {
        let content = workflow_content(&wide_table(), "sales.xlsx", at());

        assert_eq!(content.section_count(), 4);
        assert_eq!(
            content.get("Executive Summary"),
            Some(&SectionContent::bullets([
                "Dataset: sales.xlsx",
                "Total Records: 3",
                "Total Fields: 8",
            ]))
        );
        assert_eq!(content.get("Column Analysis").map(SectionContent::line_count), Some(8));
        assert_eq!(
            content.get("Data Quality"),
            Some(&SectionContent::key_values([
                ("Complete Records", 2),
                ("Missing Values", 1),
                ("Duplicate Rows", 1),
            ]))
        );
        assert_eq!(
            content.get("Insights"),
            Some(&SectionContent::bullets([
                "Data has been analyzed and loaded successfully",
                "Processing completed at 14:05:09",
                "Ready for presentation",
            ]))
        );
    }

    #[test]
    fn test_workflow_deck() {
        let content = workflow_content(&wide_table(), "sales.csv", at());
        let pres = build(&DeckSpec::with_theme("Analysis Report", ThemeColor::Blue, content));

        assert_eq!(pres.slide_count(), 5);
        assert_eq!(pres.slides()[3].body_lines(), vec![
            "Complete Records: 2",
            "Missing Values: 1",
            "Duplicate Rows: 1",
        ]);
    }
}
