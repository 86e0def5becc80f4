//! Invoice record model for the invoice engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::LineItem;

/// Name, address, and tax-registration block for the billed party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyDetails {
    pub name: String,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub tax_registration: Option<String>,
}

/// Bank account details printed on the primary page for remittance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankDetails {
    pub account_name: String,
    pub account_number: String,
    pub ifsc: String,
    pub bank_name: String,
    pub branch: Option<String>,
}

/// Issuing entity block: address, tax registration, contact, bank details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuingEntity {
    pub name: String,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub tax_registration: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub bank: Option<BankDetails>,
}

/// The billing record being rendered.
///
/// Constructed through DTO conversion, which rejects contract violations
/// before any layout computation runs. Item order is the order received from
/// the backend and is the tie-break for all numbering; the engine never
/// re-sorts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub billed_party: PartyDetails,
    pub issuing_entity: IssuingEntity,
    /// Total tax rate, split evenly into CGST/SGST halves. Zero selects the
    /// untaxed "bill of supply" mode.
    pub tax_rate_percent: Decimal,
    pub items: Vec<LineItem>,
    /// Pre-rendered by the backend, passed through unchanged.
    pub amount_in_words: String,
}

impl InvoiceRecord {
    /// Whether this document renders as a bill of supply.
    pub fn is_untaxed(&self) -> bool {
        self.tax_rate_percent.is_zero()
    }
}
