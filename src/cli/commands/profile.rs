//! Profile command implementation

use std::path::{Path, PathBuf};

use chrono::Local;
use schema_profiler::export::{ExportFormat, SchemaDocument, SchemaExporter};
use schema_profiler::import::SourceFormat;
use schema_profiler::report::{ReportMetadata, format_timestamp, write_column_reports};
use schema_profiler::{ColumnProfiler, ProfilerConfig, check_infile_status};

use crate::args::{ProfileArgs, SchemaFormatArg};
use crate::error::CliError;
use crate::output::format_profile_summary;

/// Log file name used when `--log-file` is not given
pub const DEFAULT_LOG_FILE_NAME: &str = "schema-profiler.log";

/// Fully resolved inputs of a profile run
#[derive(Debug, Clone)]
pub struct ProfilePlan {
    pub infile: PathBuf,
    pub file_type: String,
    pub config_file: Option<PathBuf>,
    pub max_equality_values: Option<usize>,
    pub outdir: PathBuf,
    pub logfile: PathBuf,
    pub format: ExportFormat,
    pub verbose: bool,
}

impl ProfilePlan {
    /// Check the input files, apply defaults and create the output directory.
    ///
    /// Runs before logging is installed, so defaults are announced on stderr.
    pub fn resolve(args: &ProfileArgs, log_file: Option<&Path>) -> Result<Self, CliError> {
        check_infile_status(&args.infile, None)?;

        if let Some(config_file) = &args.config_file {
            check_infile_status(config_file, Some("yaml"))?;
        } else {
            eprintln!(
                "--config-file was not specified and therefore the built-in defaults will be used"
            );
        }

        let outdir = match &args.outdir {
            Some(outdir) => outdir.clone(),
            None => {
                let outdir = default_outdir();
                eprintln!(
                    "--outdir was not specified and therefore was set to '{}'",
                    outdir.display()
                );
                outdir
            }
        };

        if !outdir.exists() {
            std::fs::create_dir_all(&outdir)
                .map_err(|e| CliError::OutputDir {
                    path: outdir.clone(),
                    reason: e.to_string(),
                })?;
            eprintln!("Created output directory '{}'", outdir.display());
        }

        let logfile = match log_file {
            Some(path) => path.to_path_buf(),
            None => {
                let path = outdir.join(DEFAULT_LOG_FILE_NAME);
                eprintln!(
                    "--log-file was not specified and therefore was set to '{}'",
                    path.display()
                );
                path
            }
        };

        let infile = std::path::absolute(&args.infile).unwrap_or_else(|_| args.infile.clone());

        Ok(Self {
            infile,
            file_type: args.file_type.clone(),
            config_file: args.config_file.clone(),
            max_equality_values: args.max_equality_values,
            outdir,
            logfile,
            format: match args.format {
                SchemaFormatArg::Json => ExportFormat::Json,
                SchemaFormatArg::Yaml => ExportFormat::Yaml,
            },
            verbose: args.verbose,
        })
    }

    /// Configuration from the file (or defaults) with the CLI override applied
    pub fn load_config(&self) -> Result<ProfilerConfig, CliError> {
        let mut config = match &self.config_file {
            Some(path) => ProfilerConfig::from_yaml_file(path)?,
            None => ProfilerConfig::default(),
        };

        if let Some(max) = self.max_equality_values {
            tracing::info!(max_equality_values = max, "Threshold overridden on the command line");
            config.max_equality_values = max;
        }

        Ok(config)
    }
}

/// `<tmp>/schema-profiler/<timestamp>`
fn default_outdir() -> PathBuf {
    std::env::temp_dir()
        .join(env!("CARGO_PKG_NAME"))
        .join(format_timestamp(&Local::now()))
}

/// Handle the profile command
pub fn handle_profile(plan: &ProfilePlan) -> Result<(), CliError> {
    tracing::info!(
        infile = %plan.infile.display(),
        file_type = %plan.file_type,
        "Will attempt to generate the schema for input file"
    );

    SourceFormat::require_supported(&plan.infile)?;
    let config = plan.load_config()?;

    let mut profiler = ColumnProfiler::with_config(config);
    let report = profiler.profile_path(&plan.infile)?;

    let metadata = ReportMetadata::capture(&plan.infile, Some(&plan.logfile));

    let report_paths = write_column_reports(&plan.outdir, &report, &metadata)?;
    if plan.verbose {
        for path in &report_paths {
            println!("Wrote column report file '{}'", path.display());
        }
    }

    let document = SchemaDocument::new(&report, metadata, Some(&plan.file_type));
    let schema_path = SchemaExporter::write(&document, &plan.outdir, plan.format)?;
    if plan.verbose {
        println!("Wrote schema document '{}'", schema_path.display());
    }

    print!("{}", format_profile_summary(&report));
    println!();
    println!("The log file is '{}'", plan.logfile.display());

    Ok(())
}
