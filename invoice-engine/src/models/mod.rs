//! Domain models for the invoice engine.

mod invoice;
mod line_item;
mod page;

pub use invoice::{BankDetails, InvoiceRecord, IssuingEntity, PartyDetails};
pub use line_item::{LineItem, DEFAULT_TAX_CODE};
pub use page::{
    AnnexureBody, InvoiceDocument, PageBody, PageDescriptor, PageFooter, PageHeader, PageKind,
    PartyBlock, PrimaryBody, RecordRow, SummaryRow, TaxBreakdown, TaxComponent, TotalsBlock,
    MISSING_FIELD_PLACEHOLDER, UNREGISTERED_PLACEHOLDER,
};
