//! VAT numbers without any network call

use crate::core::vat::{FormatError, VatNumber, derive_vat_number};
use std::fmt;

const WIDE_RULE: usize = 60;
const TABLE_RULE: usize = 45;

/// One input line and its derived VAT number
#[derive(Debug, Clone)]
pub struct DryRunRow {
    pub identifier: String,
    pub vat: Result<VatNumber, FormatError>,
}

/// Derivation results for a whole input list
#[derive(Debug, Clone)]
pub struct DryRunReport {
    rows: Vec<DryRunRow>,
}

impl DryRunReport {
    pub fn new(identifiers: &[String]) -> Self {
        let rows = identifiers
            .iter()
            .map(|identifier| DryRunRow {
                identifier: identifier.clone(),
                vat: derive_vat_number(identifier),
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[DryRunRow] {
        &self.rows
    }

    pub fn total(&self) -> usize {
        self.rows.len()
    }

    pub fn well_formed(&self) -> usize {
        self.rows.iter().filter(|row| row.vat.is_ok()).count()
    }

    pub fn malformed(&self) -> usize {
        self.total() - self.well_formed()
    }
}

impl fmt::Display for DryRunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wide = "=".repeat(WIDE_RULE);
        let rule = "-".repeat(TABLE_RULE);

        writeln!(f, "{}", wide)?;
        writeln!(f, "DRY RUN - no API call will be made")?;
        writeln!(f, "{}", wide)?;
        writeln!(f)?;
        writeln!(f, "{:<12} {:<18} status", "SIREN", "VAT")?;
        writeln!(f, "{}", rule)?;

        for row in &self.rows {
            match &row.vat {
                Ok(vat) => writeln!(f, "{:<12} {:<18} OK", row.identifier, vat.as_str())?,
                Err(e) => writeln!(f, "{:<12} {:<18} ERROR: {}", row.identifier, "N/A", e)?,
            }
        }

        writeln!(f, "{}", rule)?;
        writeln!(
            f,
            "Total: {} SIRENs ({} well-formed, {} malformed)",
            self.total(),
            self.well_formed(),
            self.malformed()
        )?;
        writeln!(f)?;
        write!(f, "Run again without --dry-run to validate against VIES")
    }
}
