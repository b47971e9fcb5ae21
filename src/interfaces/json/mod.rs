//! JSON adapters: the play catalog, invoice files, and statement output.

use crate::application::statement::Statement;
use crate::domain::catalog::Catalog;
use crate::domain::invoice::Invoice;
use crate::error::Result;
use serde::Deserialize;
use std::io::{Read, Write};

/// An invoice file holds either a list of invoices or a single one.
#[derive(Deserialize)]
#[serde(untagged)]
enum InvoiceDocument {
    Many(Vec<Invoice>),
    One(Invoice),
}

/// Reads a catalog keyed by play id, e.g.
/// `{"hamlet": {"name": "Hamlet", "type": "tragedy"}}`.
pub fn read_catalog<R: Read>(source: R) -> Result<Catalog> {
    Ok(serde_json::from_reader(source)?)
}

pub fn read_invoices<R: Read>(source: R) -> Result<Vec<Invoice>> {
    let invoices = match serde_json::from_reader(source)? {
        InvoiceDocument::Many(invoices) => invoices,
        InvoiceDocument::One(invoice) => vec![invoice],
    };
    Ok(invoices)
}

/// Writes statements as a pretty-printed JSON array followed by a newline.
pub fn write_statements<W: Write>(mut sink: W, statements: &[Statement]) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, statements)?;
    writeln!(sink)?;
    Ok(())
}
