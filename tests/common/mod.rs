#![allow(dead_code)]

use playbill::domain::catalog::Catalog;
use playbill::domain::invoice::{Invoice, Performance};
use playbill::domain::play::{Genre, Play};
use std::fs;
use std::io::Error;
use std::path::{Path, PathBuf};

pub fn theater_catalog() -> Catalog {
    Catalog::from_plays([
        ("hamlet", Play::new("Hamlet", Genre::Tragedy)),
        ("as-like", Play::new("As You Like It", Genre::Comedy)),
        ("othello", Play::new("Othello", Genre::Tragedy)),
        ("henry-v", Play::new("Henry V", Genre::Other("history".to_string()))),
    ])
}

pub fn big_co_invoice() -> Invoice {
    Invoice::new(
        "BigCo",
        vec![
            Performance::new("hamlet", 55),
            Performance::new("as-like", 35),
            Performance::new("othello", 40),
        ],
    )
}

/// Writes `contents` to `name` inside `dir` and returns the full path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> Result<PathBuf, Error> {
    let path = dir.join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

/// Builds a CSV invoice file with `rows` performances of `play_id` for one customer.
pub fn generate_invoice_csv(dir: &Path, play_id: &str, rows: usize) -> Result<PathBuf, Error> {
    let path = dir.join("generated.csv");
    let mut wtr = csv::WriterBuilder::new().from_path(&path)?;

    wtr.write_record(["customer", "play_id", "audience"])?;
    for i in 1..=rows {
        wtr.write_record(["BigCo", play_id, &i.to_string()])?;
    }

    wtr.flush()?;
    Ok(path)
}
