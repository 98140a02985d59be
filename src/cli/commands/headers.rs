//! Headers command implementation

use schema_profiler::import::{SourceFormat, TsvReader};
use schema_profiler::{ColumnProfiler, check_infile_status};

use crate::args::HeadersArgs;
use crate::error::CliError;
use crate::output::format_header_listing;

/// Handle the headers command
pub fn handle_headers(args: &HeadersArgs) -> Result<(), CliError> {
    check_infile_status(&args.infile, None)?;
    SourceFormat::require_supported(&args.infile)?;

    let mut reader = TsvReader::from_path(&args.infile)?;
    let mut profiler = ColumnProfiler::new();
    let columns = profiler.read_columns(&mut reader, &args.infile.display().to_string())?;

    print!("{}", format_header_listing(&columns));
    Ok(())
}
