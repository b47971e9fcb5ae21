//! Application layer orchestrating the pricing core.
//!
//! This module defines the `StatementBuilder`, which resolves each performance
//! of an invoice against the catalog, prices it, and assembles the totals into
//! a `Statement`.

pub mod statement;
