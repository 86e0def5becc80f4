//! Line item model for the invoice engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// SAC code printed for a charge the backend did not classify.
pub const DEFAULT_TAX_CODE: &str = "9993";

/// One billable charge on an invoice.
///
/// Supplied whole by the records backend and immutable for the duration of a
/// pagination run. `net_amount = gross_amount - discount` is enforced at
/// ingestion, before any item reaches the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub line_item_id: i64,
    /// Patient record this charge is attributed to; `None` marks a
    /// non-record charge (flat fee or custom charge).
    pub record_ref: Option<String>,
    pub description: String,
    pub gross_amount: Decimal,
    pub discount: Decimal,
    pub net_amount: Decimal,
    pub tax_code: String,
}

impl LineItem {
    /// Whether this charge is attributable to a specific patient record.
    pub fn is_record_charge(&self) -> bool {
        self.record_ref.is_some()
    }
}
