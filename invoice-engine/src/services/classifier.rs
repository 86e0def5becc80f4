//! Line item classification and primary-page summary rows.

use rust_decimal::Decimal;

use crate::models::{LineItem, SummaryRow, DEFAULT_TAX_CODE};

/// Reserved description marking the one-time registration fee. The match is
/// exact; anything else lands in the custom-charge group.
pub const REGISTRATION_FEE_MARKER: &str = "Registration Fee";

/// Disjoint item groups, each preserving the original relative order.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedItems {
    /// Items whose description exactly matches the registration-fee marker.
    /// More than one is legal; they are summed into a single summary row.
    pub registration_fees: Vec<LineItem>,
    /// Items attributed to a patient record; itemized on annexure pages.
    pub record_charges: Vec<LineItem>,
    /// Everything else, one summary row each.
    pub custom_charges: Vec<LineItem>,
}

/// Partition items into the three groups. The marker check runs first, so a
/// registration fee carrying a stray record reference still counts as a fee.
pub fn classify(items: &[LineItem]) -> ClassifiedItems {
    let mut classified = ClassifiedItems::default();
    for item in items {
        if item.description == REGISTRATION_FEE_MARKER {
            classified.registration_fees.push(item.clone());
        } else if item.is_record_charge() {
            classified.record_charges.push(item.clone());
        } else {
            classified.custom_charges.push(item.clone());
        }
    }
    classified
}

/// Build the primary page's numbered summary rows. Serial numbers follow
/// group presence order: registration fee, record-charge aggregate, then
/// each custom charge in original order. Empty groups contribute no row and
/// consume no serial.
pub fn summary_rows(classified: &ClassifiedItems) -> Vec<SummaryRow> {
    let mut rows = Vec::new();
    let mut serial = 0u32;

    if !classified.registration_fees.is_empty() {
        serial += 1;
        rows.push(SummaryRow {
            serial,
            description: REGISTRATION_FEE_MARKER.to_string(),
            tax_code: tax_code_of(&classified.registration_fees),
            amount: net_sum(&classified.registration_fees),
        });
    }

    if !classified.record_charges.is_empty() {
        serial += 1;
        rows.push(SummaryRow {
            serial,
            description: format!(
                "Processing of {} patient records",
                classified.record_charges.len()
            ),
            tax_code: tax_code_of(&classified.record_charges),
            amount: net_sum(&classified.record_charges),
        });
    }

    for item in &classified.custom_charges {
        serial += 1;
        rows.push(SummaryRow {
            serial,
            description: item.description.clone(),
            tax_code: item.tax_code.clone(),
            amount: item.net_amount,
        });
    }

    rows
}

fn net_sum(items: &[LineItem]) -> Decimal {
    items.iter().map(|item| item.net_amount).sum()
}

fn tax_code_of(items: &[LineItem]) -> String {
    items
        .first()
        .map(|item| item.tax_code.clone())
        .unwrap_or_else(|| DEFAULT_TAX_CODE.to_string())
}
