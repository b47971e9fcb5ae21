use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use playbill::application::statement::{LINE_ENDING, StatementBuilder};
use playbill::domain::invoice::Invoice;
use playbill::domain::pricing::PricingEngine;
use playbill::interfaces::csv::invoice_reader::InvoiceReader;
use playbill::interfaces::currency::{CurrencyFormat, Locale};
use playbill::interfaces::json;
use playbill::telemetry;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Play catalog JSON file
    plays: PathBuf,

    /// Invoices file: JSON, or CSV with customer,play_id,audience rows
    invoices: PathBuf,

    /// Locale used to format currency amounts
    #[arg(long, default_value = "en-US")]
    locale: Locale,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn load_invoices(path: &Path) -> playbill::error::Result<Vec<Invoice>> {
    let file = BufReader::new(File::open(path)?);
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        InvoiceReader::new(file).invoices()
    } else {
        json::read_invoices(file)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level).into_diagnostic()?;

    let file = File::open(&cli.plays).into_diagnostic()?;
    let catalog = json::read_catalog(BufReader::new(file)).into_diagnostic()?;
    let invoices = load_invoices(&cli.invoices).into_diagnostic()?;
    info!(
        plays = catalog.len(),
        invoices = invoices.len(),
        locale = %cli.locale,
        "inputs loaded"
    );

    let pricing = PricingEngine::standard();
    let builder = StatementBuilder::new(&pricing, CurrencyFormat::for_locale(cli.locale));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => {
            for (index, invoice) in invoices.iter().enumerate() {
                // Render fully before writing so a failed statement prints nothing
                let text = builder.render(invoice, &catalog).into_diagnostic()?;
                if index > 0 {
                    out.write_all(LINE_ENDING.as_bytes()).into_diagnostic()?;
                }
                out.write_all(text.as_bytes()).into_diagnostic()?;
            }
        }
        OutputFormat::Json => {
            let statements = invoices
                .iter()
                .map(|invoice| builder.build(invoice, &catalog))
                .collect::<playbill::error::Result<Vec<_>>>()
                .into_diagnostic()?;
            json::write_statements(out, &statements).into_diagnostic()?;
        }
    }

    Ok(())
}
