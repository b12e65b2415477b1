use crate::config::{InspectConfig, OutputFormat};
use crate::error::{InspectError, InspectResult};
use crate::inspector::{InspectEvent, Inspector};
use crate::report::sheet_names_line;
use colored::Colorize;

/// Execute the inspect command: print the report for `config.path`.
///
/// The text report is printed as it is built, so a sheet that fails to read
/// leaves the sheet names and the earlier sheets on stdout. JSON and YAML are
/// printed only once the whole report is ready.
pub fn inspect(config: &InspectConfig) -> InspectResult<()> {
    let inspector = Inspector::new(config.clone());

    match config.format {
        OutputFormat::Text => {
            inspector.stream(|event| match event {
                InspectEvent::SheetNames(names) => print!("{}", sheet_names_line(names)),
                InspectEvent::Sheet(sheet) => print!("{}", sheet),
            })?;
        }
        format => {
            let report = inspector.run()?;
            print!("{}", report.render(format)?);
        }
    }
    Ok(())
}

/// Print a failure as a single line on stdout
pub fn print_error(err: &InspectError) {
    println!("{}", err.to_string().red());
}
