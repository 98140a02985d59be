//! Output formatting for CLI

use schema_profiler::ProfileReport;
use schema_profiler::inference::Column;

/// Format a profiling result as a column summary
pub fn format_profile_summary(report: &ProfileReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n✅ Profiled {} column(s) across {} data row(s):\n",
        report.columns.len(),
        report.data_rows
    ));

    for profile in &report.columns {
        let enum_marker = if profile.is_enum { " [enum]" } else { "" };
        output.push_str(&format!(
            "  {:>3}  {} -> {}: {} ({} distinct){}\n",
            profile.column.position,
            profile.column.name,
            profile.column.attribute_name,
            profile.datatype,
            profile.distinct_count(),
            enum_marker
        ));
    }

    if !report.enum_lookup.is_empty() {
        output.push_str("\nEnum classes:\n");
        for class_name in report.enum_lookup.class_names() {
            let count = report
                .enum_lookup
                .members(class_name)
                .map(|members| members.len())
                .unwrap_or_default();
            output.push_str(&format!("  - {}Enum ({} member(s))\n", class_name, count));
        }
    }

    output
}

/// Format the header columns with their derived names
pub fn format_header_listing(columns: &[Column]) -> String {
    let mut output = String::new();

    output.push_str(&format!("Found {} column(s):\n", columns.len()));
    for column in columns {
        output.push_str(&format!(
            "  {:>3}  {}\n       attribute: {}\n       class:     {}\n",
            column.position, column.name, column.attribute_name, column.class_name
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema_profiler::{ColumnProfiler, ProfilerConfig};

    #[test]
    fn test_profile_summary() {
        let config = ProfilerConfig::builder().max_equality_values(2).build();
        let report = ColumnProfiler::with_config(config)
            .profile_reader("Color\tN\nRed\t1\nBlue\t2\nRed\t3\n".as_bytes(), "t.tsv")
            .unwrap();

        let summary = format_profile_summary(&report);
        assert!(summary.contains("Profiled 2 column(s) across 3 data row(s)"));
        assert!(summary.contains("Color -> color: str (2 distinct) [enum]"));
        assert!(summary.contains("N -> n: int (3 distinct)\n"));
        assert!(summary.contains("ColorEnum (2 member(s))"));
    }

    #[test]
    fn test_header_listing() {
        let columns = vec![Column::new("Sample ID", 0)];
        let listing = format_header_listing(&columns);
        assert!(listing.starts_with("Found 1 column(s):\n"));
        assert!(listing.contains("attribute: sampleid"));
        assert!(listing.contains("class:     SampleId"));
    }
}
