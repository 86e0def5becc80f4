//! Derived page layout types.
//!
//! Everything in this module is produced fresh by each pagination run and
//! never mutated in place. A `PageDescriptor` is self-sufficient for a
//! rendering surface to draw one fixed-size page: all optional display
//! fields are already resolved to their placeholder text.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::BankDetails;

/// Shown where an optional address field is absent.
pub const MISSING_FIELD_PLACEHOLDER: &str = "—";

/// Shown for a party with no tax registration id.
pub const UNREGISTERED_PLACEHOLDER: &str = "URD";

/// Page variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Primary,
    Annexure,
}

impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Primary => "primary",
            PageKind::Annexure => "annexure",
        }
    }
}

/// One numbered row on the primary page's summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub serial: u32,
    pub description: String,
    pub tax_code: String,
    pub amount: Decimal,
}

/// One record-charge row on an annexure page.
///
/// Serials are contiguous across the whole annexure sequence, not per page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordRow {
    pub serial: u32,
    pub record_ref: String,
    pub description: String,
    pub gross_amount: Decimal,
    pub discount: Decimal,
    pub net_amount: Decimal,
}

/// One named tax component (CGST or SGST under the flat split).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxComponent {
    pub name: String,
    pub rate_percent: Decimal,
    pub amount: Decimal,
}

/// Document-level money summary.
///
/// `tax_components` is a variable-length list; the flat two-way split always
/// produces two entries, and untaxed documents produce none. The displayed
/// component amounts may together differ from `tax_total` by at most one
/// paisa of rounding slack, see `services::calculator`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub subtotal: Decimal,
    pub tax_components: Vec<TaxComponent>,
    pub tax_total: Decimal,
    pub grand_total: Decimal,
}

/// Totals block on the primary page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalsBlock {
    pub breakdown: TaxBreakdown,
    pub amount_in_words: String,
}

/// Party block with display fallbacks already applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyBlock {
    pub name: String,
    pub address: String,
    pub tax_registration: String,
}

/// Header repeated at the top of every page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageHeader {
    pub title: String,
    pub invoice_number: String,
    pub issue_date: NaiveDate,
}

/// Footer repeated on every page so separated sheets stay identifiable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageFooter {
    pub issued_by: String,
    pub contact: String,
}

/// Body of the primary summary page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryBody {
    pub billed_party: PartyBlock,
    pub issuing_entity: PartyBlock,
    pub bank: Option<BankDetails>,
    pub summary_rows: Vec<SummaryRow>,
    pub totals: TotalsBlock,
}

/// Body of one annexure page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnexureBody {
    pub rows: Vec<RecordRow>,
    /// Sum of this page's row net amounts, on unrounded values.
    pub page_subtotal: Decimal,
}

/// Page body variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageBody {
    Primary(PrimaryBody),
    Annexure(AnnexureBody),
}

/// One printable page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDescriptor {
    /// 1-based position; constant document-wide once assembled.
    pub page_index: u32,
    pub page_count: u32,
    pub header: PageHeader,
    pub body: PageBody,
    pub footer: PageFooter,
}

impl PageDescriptor {
    pub fn kind(&self) -> PageKind {
        match self.body {
            PageBody::Primary(_) => PageKind::Primary,
            PageBody::Annexure(_) => PageKind::Annexure,
        }
    }

    /// Per-page subtotal; `None` for the primary page, which carries the
    /// full totals block instead.
    pub fn page_subtotal(&self) -> Option<Decimal> {
        match &self.body {
            PageBody::Primary(_) => None,
            PageBody::Annexure(body) => Some(body.page_subtotal),
        }
    }
}

/// Output of one pagination run: the ordered page list plus the document
/// totals, exposed separately for toolbar display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDocument {
    pub invoice_number: String,
    pub pages: Vec<PageDescriptor>,
    pub totals: TaxBreakdown,
}

impl InvoiceDocument {
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }
}
