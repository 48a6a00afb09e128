//! Output formatting for CLI results

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::client::Organization;
use crate::error::{Error, Result};
use crate::reconcile::Outcome;

pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;
}

/// Format and print data to stdout
pub fn print<T: Formattable + ?Sized>(data: &T, format: OutputFormat) -> Result<()> {
    let output = data.format(format)?;
    println!("{}", output);
    Ok(())
}

/// Report a failed run.
///
/// The message always goes to stderr. JSON consumers additionally get a
/// `{"failed": true, "msg": ...}` record on stdout in place of an outcome.
pub fn print_failure(err: &Error, format: OutputFormat) {
    eprintln!("{} {}", "Error:".red().bold(), err);
    if let OutputFormat::Json = format {
        if let Ok(record) = json::format_failure(&err.to_string()) {
            println!("{}", record);
        }
    }
}

impl Formattable for Outcome {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Pretty => {
                let status = if self.changed {
                    "changed".yellow().bold()
                } else {
                    "ok".green().bold()
                };
                let mut out = format!("{}: {}\n  Name: {}", status, self.msg, self.org_name);
                if let Some(id) = self.org_id {
                    out.push_str(&format!("\n  ID:   {}", id));
                }
                Ok(out)
            }
        }
    }
}

impl Formattable for Vec<Organization> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Pretty => Ok(table::format_orgs(self)),
        }
    }
}
