//! End-to-end profiling tests

use std::fs;
use std::path::{Path, PathBuf};

use schema_profiler::export::{ExportFormat, SchemaDocument, SchemaExporter};
use schema_profiler::import::SourceFormat;
use schema_profiler::inference::{ColumnProfiler, Datatype, ProfilerConfig, ProfilerError};
use schema_profiler::report::{ReportMetadata, write_column_reports};
use schema_profiler::validation::{InfileProblem, check_infile_status};

const SAMPLES: &str = "Sample ID\tTissue Type\tWeight (mg)\tReplicate\tNotes\n\
                       S-001\tLiver\t12.5\t1\tok\n\
                       S-002\tKidney\t8\t2\t\n\
                       \n\
                       S-003\tLiver\t10.25\t1\trepeat\n\
                       S-004\tliver\t9.0\t3\tok\n";

fn write_samples(dir: &Path) -> PathBuf {
    let path = dir.join("samples.tsv");
    fs::write(&path, SAMPLES).unwrap();
    path
}

fn metadata(infile: &Path) -> ReportMetadata {
    ReportMetadata::capture(infile, Some(Path::new("/tmp/schema-profiler.log")))
}

fn profiler(max: usize) -> ColumnProfiler {
    ColumnProfiler::with_config(ProfilerConfig::builder().max_equality_values(max).build())
}

mod profiling_tests {
    use super::*;

    #[test]
    fn test_profile_file() {
        let dir = tempfile::tempdir().unwrap();
        let infile = write_samples(dir.path());

        let report = profiler(3).profile_path(&infile).unwrap();

        assert_eq!(report.data_rows, 4);
        let types: Vec<(&str, Datatype)> = report
            .columns
            .iter()
            .map(|p| (p.column.attribute_name.as_str(), p.datatype))
            .collect();
        assert_eq!(
            types,
            vec![
                ("sampleid", Datatype::Str),
                ("tissuetype", Datatype::Str),
                ("weightmg", Datatype::Float),
                ("replicate", Datatype::Int),
                ("notes", Datatype::Str),
            ]
        );
    }

    #[test]
    fn test_enum_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let infile = write_samples(dir.path());

        let report = profiler(3).profile_path(&infile).unwrap();

        // Liver / Kidney / liver: 3 distinct, within threshold
        let tissue = report.lookup.get("tissuetype").unwrap();
        assert_eq!(tissue.class_name, "TissueType");
        assert_eq!(tissue.column_position, 2);
        assert_eq!(
            tissue.uniq_values.as_deref(),
            Some(&["Liver".to_string(), "Kidney".to_string(), "liver".to_string()][..])
        );

        // "Liver" and "liver" share the member name; the later value wins
        let members = report.enum_lookup.members("TissueType").unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members.get("LIVER").map(String::as_str), Some("liver"));
        assert_eq!(members.get("KIDNEY").map(String::as_str), Some("Kidney"));

        let replicate = report.enum_lookup.members("Replicate").unwrap();
        let names: Vec<&str> = replicate.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["REPLICATE_1", "REPLICATE_2", "REPLICATE_3"]);

        // Empty note derives an empty symbol, qualified by the class name
        assert_eq!(report.enum_lookup.member_value("Notes", "NOTES_"), Some(""));

        // Four distinct sample ids exceed the threshold
        assert!(report.lookup.get("sampleid").unwrap().uniq_values.is_none());
        assert!(report.enum_lookup.members("SampleId").is_none());
    }

    #[test]
    fn test_profiler_reusable_across_files() {
        let dir = tempfile::tempdir().unwrap();
        let infile = write_samples(dir.path());
        let other = dir.path().join("other.tsv");
        fs::write(&other, "Code\nA\nB\n").unwrap();

        let mut profiler = profiler(10);
        profiler.profile_path(&infile).unwrap();
        assert_eq!(profiler.attribute_name("Tissue Type"), Some("tissuetype"));

        profiler.profile_path(&other).unwrap();
        assert_eq!(profiler.attribute_name("Code"), Some("code"));
        assert_eq!(profiler.attribute_name("Tissue Type"), None);
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = profiler(3).profile_path(Path::new("/nonexistent/samples.tsv"));
        assert!(matches!(result, Err(ProfilerError::Import(_))));
    }
}

mod report_tests {
    use super::*;

    fn body_counts(content: &str) -> (usize, usize) {
        let mut rows = 0;
        let mut sum = 0;
        for line in content.lines() {
            if let Some(n) = line.strip_prefix("Number of data rows: '") {
                rows = n.trim_end_matches('\'').parse().unwrap();
            }
            if let Some(rest) = line.strip_prefix("value: '")
                && let Some(idx) = rest.find("; count: ")
            {
                let tail = &rest[idx + "; count: ".len()..];
                let count = tail.split(';').next().unwrap();
                sum += count.parse::<usize>().unwrap();
            }
        }
        (rows, sum)
    }

    #[test]
    fn test_reports_written_per_column() {
        let dir = tempfile::tempdir().unwrap();
        let infile = write_samples(dir.path());
        let outdir = dir.path().join("out");
        fs::create_dir(&outdir).unwrap();

        let report = profiler(3).profile_path(&infile).unwrap();
        let paths = write_column_reports(&outdir, &report, &metadata(&infile)).unwrap();

        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "0_SampleID.tsv",
                "1_TissueType.tsv",
                "2_Weight_mg_.tsv",
                "3_Replicate.tsv",
                "4_Notes.tsv",
            ]
        );
    }

    #[test]
    fn test_percentage_counts_sum_to_row_count() {
        let dir = tempfile::tempdir().unwrap();
        let infile = write_samples(dir.path());

        let report = profiler(3).profile_path(&infile).unwrap();
        let paths = write_column_reports(dir.path(), &report, &metadata(&infile)).unwrap();

        for path in paths {
            let content = fs::read_to_string(&path).unwrap();
            let (rows, sum) = body_counts(&content);
            assert_eq!(rows, 4, "row count in {}", path.display());
            assert_eq!(sum, rows, "counts in {}", path.display());
        }
    }

    #[test]
    fn test_tissue_report_content() {
        let dir = tempfile::tempdir().unwrap();
        let infile = write_samples(dir.path());

        let report = profiler(3).profile_path(&infile).unwrap();
        let paths = write_column_reports(dir.path(), &report, &metadata(&infile)).unwrap();

        let content = fs::read_to_string(&paths[1]).unwrap();
        assert!(content.contains("Column name: 'Tissue Type'\n"));
        assert!(content.contains("Column position: '1'\n"));
        assert!(content.contains("Here are the unique '3' values:\n"));
        assert!(content.contains("value: 'Liver'; count: 2; percentage: 50.00\n"));
        assert!(content.contains("value: 'Kidney'; count: 1; percentage: 25.00\n"));
    }

    #[test]
    fn test_reports_are_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let infile = write_samples(dir.path());
        let first = dir.path().join("first");
        let second = dir.path().join("second");
        fs::create_dir(&first).unwrap();
        fs::create_dir(&second).unwrap();

        let run = |outdir: &Path| {
            let report = profiler(3).profile_path(&infile).unwrap();
            write_column_reports(outdir, &report, &metadata(&infile)).unwrap()
        };
        let a = run(&first);
        let b = run(&second);

        let strip = |path: &PathBuf| -> String {
            fs::read_to_string(path)
                .unwrap()
                .lines()
                .filter(|l| !l.starts_with("## date-created:") && !l.starts_with("## created-by:"))
                .collect::<Vec<_>>()
                .join("\n")
        };
        for (pa, pb) in a.iter().zip(b.iter()) {
            assert_eq!(strip(pa), strip(pb));
        }
    }
}

mod export_tests {
    use super::*;

    #[test]
    fn test_schema_document_for_file() {
        let dir = tempfile::tempdir().unwrap();
        let infile = write_samples(dir.path());

        let report = profiler(3).profile_path(&infile).unwrap();
        let document = SchemaDocument::new(&report, metadata(&infile), Some("samples"));
        let path = SchemaExporter::write(&document, dir.path(), ExportFormat::Yaml).unwrap();

        assert_eq!(path, dir.path().join("schema.yaml"));
        let parsed: SchemaDocument =
            serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.file_type.as_deref(), Some("samples"));
        assert_eq!(
            parsed.lookup.get("weightmg").unwrap().datatype,
            Datatype::Float
        );
        assert_eq!(parsed.enum_lookup, report.enum_lookup);
    }
}

mod preflight_tests {
    use super::*;

    #[test]
    fn test_csv_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.csv");
        fs::write(&path, "a,b\n1,2\n").unwrap();

        assert!(check_infile_status(&path, None).is_ok());
        assert!(SourceFormat::require_supported(&path).is_err());
    }

    #[test]
    fn test_config_file_checks() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("config.yaml");
        fs::write(&good, "max_equality_values: 4\n").unwrap();
        check_infile_status(&good, Some("yaml")).unwrap();
        assert_eq!(
            ProfilerConfig::from_yaml_file(&good).unwrap().max_equality_values,
            4
        );

        let wrong = dir.path().join("config.toml");
        fs::write(&wrong, "max_equality_values = 4\n").unwrap();
        let err = check_infile_status(&wrong, Some("yaml")).unwrap_err();
        assert_eq!(
            err.problems,
            vec![InfileProblem::WrongExtension("yaml".to_string())]
        );
    }
}
