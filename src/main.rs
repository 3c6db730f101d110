use anyhow::Result;
use clap::Parser;

use profit_sheet_cli::template;

/// Writes a ready-to-fill profit/loss tracking sheet for CCTV service jobs
/// into the current directory. Takes no options; the template is fixed.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    // No runtime options, but stray arguments are still rejected.
    Cli::parse();

    template::write_template(template::OUTPUT_FILE)?;

    println!("Excel file created: {}", template::OUTPUT_FILE);

    Ok(())
}
