use crate::domain::invoice::{Audience, Invoice, Performance};
use crate::domain::play::PlayId;
use crate::error::{BillingError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct InvoiceRecord {
    customer: String,
    #[serde(alias = "playID", alias = "playId")]
    play_id: PlayId,
    audience: Audience,
}

/// Reads invoices from a CSV source with `customer,play_id,audience` rows.
///
/// Consecutive rows for the same customer form one invoice, in file order.
pub struct InvoiceReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> InvoiceReader<R> {
    /// Creates a new `InvoiceReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Reads every row and groups them into invoices.
    ///
    /// Any malformed row fails the whole read; a half-read invoice would be
    /// billed wrong.
    pub fn invoices(self) -> Result<Vec<Invoice>> {
        let mut groups: Vec<(String, Vec<Performance>)> = Vec::new();

        for record in self.reader.into_deserialize::<InvoiceRecord>() {
            let record = record?;
            if record.customer.is_empty() {
                return Err(BillingError::ValidationError(format!(
                    "missing customer for play {}",
                    record.play_id
                )));
            }
            let performance = Performance::new(record.play_id, record.audience);

            match groups.last_mut() {
                Some((customer, performances)) if *customer == record.customer => {
                    performances.push(performance);
                }
                _ => groups.push((record.customer, vec![performance])),
            }
        }

        Ok(groups
            .into_iter()
            .map(|(customer, performances)| Invoice::new(customer, performances))
            .collect())
    }
}
