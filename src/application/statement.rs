use crate::domain::catalog::Catalog;
use crate::domain::invoice::{Audience, Invoice, Performance};
use crate::domain::money::{Amount, Credits};
use crate::domain::play::{Genre, PlayId};
use crate::domain::ports::CurrencyFormatter;
use crate::domain::pricing::PricingEngine;
use crate::error::Result;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Line terminator used by rendered statements.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// One priced performance on a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementLine {
    pub play_id: PlayId,
    pub play_name: String,
    pub genre: Genre,
    pub audience: Audience,
    pub amount: Amount,
    pub credits: Credits,
}

/// A fully priced invoice, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    pub customer: String,
    pub lines: Vec<StatementLine>,
    pub total_amount: Amount,
    pub total_credits: Credits,
}

impl Statement {
    /// Renders the plain-text statement. Every line, including the last,
    /// ends with [`LINE_ENDING`].
    pub fn render_text<F: CurrencyFormatter + ?Sized>(&self, currency: &F) -> String {
        let mut text = format!("Statement for {}{LINE_ENDING}", self.customer);
        for line in &self.lines {
            text.push_str(&format!(
                "  {}: {} ({} seats){LINE_ENDING}",
                line.play_name,
                currency.format(line.amount),
                line.audience
            ));
        }
        text.push_str(&format!(
            "Amount owed is {}{LINE_ENDING}",
            currency.format(self.total_amount)
        ));
        text.push_str(&format!(
            "You earned {} credits{LINE_ENDING}",
            self.total_credits
        ));
        text
    }
}

/// Prices every performance of an invoice and assembles the statement.
///
/// Holds no state between calls; the catalog and invoice are passed in
/// explicitly so independent statements can be built side by side.
pub struct StatementBuilder<'a, F: CurrencyFormatter> {
    pricing: &'a PricingEngine,
    currency: F,
}

impl<'a, F: CurrencyFormatter> StatementBuilder<'a, F> {
    pub fn new(pricing: &'a PricingEngine, currency: F) -> Self {
        Self { pricing, currency }
    }

    pub fn currency(&self) -> &F {
        &self.currency
    }

    /// Builds the structured statement.
    ///
    /// The first unknown play or unsupported genre aborts the whole
    /// statement; no partial result is returned.
    #[instrument(skip_all, fields(customer = %invoice.customer()))]
    pub fn build(&self, invoice: &Invoice, catalog: &Catalog) -> Result<Statement> {
        let lines = invoice
            .performances()
            .iter()
            .map(|performance| self.line_for(performance, catalog))
            .collect::<Result<Vec<_>>>()?;

        let total_amount: Amount = lines.iter().map(|line| line.amount).sum();
        let total_credits: Credits = lines.iter().map(|line| line.credits).sum();

        info!(
            lines = lines.len(),
            total_amount = total_amount.minor(),
            total_credits = total_credits.value(),
            "statement built"
        );

        Ok(Statement {
            customer: invoice.customer().to_string(),
            lines,
            total_amount,
            total_credits,
        })
    }

    /// Builds and renders the plain-text statement.
    pub fn render(&self, invoice: &Invoice, catalog: &Catalog) -> Result<String> {
        Ok(self.build(invoice, catalog)?.render_text(&self.currency))
    }

    fn line_for(&self, performance: &Performance, catalog: &Catalog) -> Result<StatementLine> {
        let play = catalog
            .lookup(performance.play_id.as_str())
            .inspect_err(|err| warn!(play_id = %performance.play_id, "{err}"))?;

        let charge = self
            .pricing
            .price(play, performance.audience)
            .inspect_err(|err| warn!(play_id = %performance.play_id, "{err}"))?;

        debug!(
            play_id = %performance.play_id,
            genre = %play.genre,
            audience = performance.audience,
            amount = charge.amount.minor(),
            credits = charge.credits.value(),
            "priced performance"
        );

        Ok(StatementLine {
            play_id: performance.play_id.clone(),
            play_name: play.name.clone(),
            genre: play.genre.clone(),
            audience: performance.audience,
            amount: charge.amount,
            credits: charge.credits,
        })
    }
}
