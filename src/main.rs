use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use fifo_credit::{
    validate_config, AppConfig, JsonReport, LogParser, OutputFormat, ProfitEngine,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Broker log file to read. Reads stdin when omitted
    file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print a per-company summary table after the report
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Print records that were skipped while parsing
    #[arg(long, default_value_t = false)]
    diagnostics: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = AppConfig {
        input: args.file,
        format: args.format,
        show_summary: args.summary,
        show_diagnostics: args.diagnostics,
    };
    validate_config(&config)?;

    let log_text = config.read_log().context("Failed to read broker log")?;

    let outcome = LogParser::new().parse_with_diagnostics(&log_text);
    let report = ProfitEngine::new().compute(&outcome.transactions);

    match config.format {
        OutputFormat::Text => {
            print!("{}", report);

            if config.show_summary {
                println!("\n=== Summary by Company ===\n{}", report.summary_table());
            }

            if config.show_diagnostics {
                let diagnostics = &outcome.diagnostics;
                println!("\n=== PARSE DIAGNOSTICS ===");
                println!(
                    "Matched: {}, retained: {}, skipped: {}, rejected sells: {}",
                    diagnostics.matched,
                    diagnostics.retained,
                    diagnostics.skipped_count(),
                    report.rejected_count()
                );
                if diagnostics.is_clean() {
                    println!("  No records skipped");
                }
                for skipped in &diagnostics.skipped {
                    println!(
                        "  offset {}: {} {} - {}",
                        skipped.offset, skipped.date, skipped.company, skipped.reason
                    );
                }
            }
        }
        OutputFormat::Json => {
            let payload = JsonReport {
                transactions: &outcome.transactions,
                report: &report,
                diagnostics: config.show_diagnostics.then_some(&outcome.diagnostics),
            };
            let json = payload.to_json_pretty().context("Failed to serialize report")?;
            println!("{}", json);
        }
    }

    Ok(())
}
