use clap::Parser;
use sheet_inspect::cli;
use sheet_inspect::config::{InspectConfig, OutputFormat, DEFAULT_WORKBOOK};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sheet-inspect")]
#[command(about = "List the sheets of a workbook and preview each one.")]
#[command(long_about = "sheet-inspect - quick look inside a spreadsheet workbook

Prints the workbook's sheet names, then for every sheet the first rows
as a table and the inferred type of each column. Nothing is written.

SUPPORTED FORMATS:
  .xlsx .xlsm .xlam .xlsb .xls .xla .ods

COLUMN TYPES:
  int64, float64, bool, datetime, duration, text, empty
  (inferred over the whole column, not only the previewed rows)

EXIT STATUS:
  0  report printed, or read error reported (without --strict)
  1  missing format engine or file not found
  2  read error with --strict, or invalid arguments

EXAMPLES:
  sheet-inspect budget.xlsx
  sheet-inspect budget.xlsx --rows 10 --sheet Income --sheet Expenses
  sheet-inspect budget.ods --format json")]
#[command(version)]
struct Cli {
    /// Path to the workbook
    #[arg(env = "SHEET_INSPECT_PATH", default_value = DEFAULT_WORKBOOK)]
    path: PathBuf,

    /// Number of data rows to preview per sheet
    #[arg(
        short,
        long,
        env = "SHEET_INSPECT_ROWS",
        default_value = "5",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    rows: u32,

    /// Only preview this sheet (repeatable)
    #[arg(short, long = "sheet", value_name = "NAME")]
    sheets: Vec<String>,

    /// Output format: text, json or yaml
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Exit with status 2 when the workbook cannot be read
    #[arg(long)]
    strict: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> InspectConfig {
        InspectConfig::new(&self.path)
            .with_preview_rows(self.rows as usize)
            .with_sheets(self.sheets.clone())
            .with_format(self.format)
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("sheet_inspect=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("{e:#}");
    }

    match cli::inspect(&cli.config()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::print_error(&e);
            ExitCode::from(e.exit_code(cli.strict))
        }
    }
}
