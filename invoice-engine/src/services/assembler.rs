//! Document assembly: primary and annexure page composition.
//!
//! A pure transform from `InvoiceRecord` to an ordered page list. The
//! assembler never validates record fields; missing optional display fields
//! degrade to placeholders, and the source record is read-only throughout.

use tracing::{info, instrument};

use crate::config::EngineConfig;
use crate::models::{
    AnnexureBody, InvoiceDocument, InvoiceRecord, IssuingEntity, PageBody, PageDescriptor,
    PageFooter, PageHeader, PartyBlock, PartyDetails, PrimaryBody, TotalsBlock,
    MISSING_FIELD_PLACEHOLDER, UNREGISTERED_PLACEHOLDER,
};
use crate::services::calculator::compute_totals;
use crate::services::classifier::{classify, summary_rows};
use crate::services::metrics::{
    ASSEMBLY_DURATION, DOCUMENTS_ASSEMBLED_TOTAL, PAGES_EMITTED_TOTAL,
};
use crate::services::paginator::plan_annexures;

/// Primary page title for a taxed document.
pub const TAX_INVOICE_TITLE: &str = "Tax Invoice";
/// Primary page title for an untaxed document.
pub const BILL_OF_SUPPLY_TITLE: &str = "Bill of Supply";
/// Title of every continuation page.
pub const ANNEXURE_TITLE: &str = "Annexure";

/// Assemble the full page list for one invoice record.
///
/// Safe to call repeatedly and concurrently; identical input yields
/// identical output, and each run produces a fresh immutable document.
#[instrument(skip(record, config), fields(invoice_number = %record.invoice_number))]
pub fn assemble(record: &InvoiceRecord, config: &EngineConfig) -> InvoiceDocument {
    let timer = ASSEMBLY_DURATION.start_timer();

    let classified = classify(&record.items);
    let totals = compute_totals(&record.items, record.tax_rate_percent);
    let rows = summary_rows(&classified);
    let chunks = plan_annexures(&classified.record_charges, config.annexure_page_capacity);

    let page_count = (1 + chunks.len()) as u32;
    let footer = footer_of(&record.issuing_entity);

    let mut pages = Vec::with_capacity(page_count as usize);
    pages.push(PageDescriptor {
        page_index: 1,
        page_count,
        header: PageHeader {
            title: primary_title(record).to_string(),
            invoice_number: record.invoice_number.clone(),
            issue_date: record.issue_date,
        },
        body: PageBody::Primary(PrimaryBody {
            billed_party: billed_party_block(&record.billed_party),
            issuing_entity: issuing_entity_block(&record.issuing_entity),
            bank: record.issuing_entity.bank.clone(),
            summary_rows: rows,
            totals: TotalsBlock {
                breakdown: totals.clone(),
                amount_in_words: record.amount_in_words.clone(),
            },
        }),
        footer: footer.clone(),
    });

    for (index, chunk) in chunks.into_iter().enumerate() {
        pages.push(PageDescriptor {
            page_index: (index + 2) as u32,
            page_count,
            header: PageHeader {
                title: ANNEXURE_TITLE.to_string(),
                invoice_number: record.invoice_number.clone(),
                issue_date: record.issue_date,
            },
            body: PageBody::Annexure(AnnexureBody {
                rows: chunk.rows,
                page_subtotal: chunk.subtotal,
            }),
            footer: footer.clone(),
        });
    }

    DOCUMENTS_ASSEMBLED_TOTAL
        .with_label_values(&[document_mode(record)])
        .inc();
    PAGES_EMITTED_TOTAL.with_label_values(&["primary"]).inc();
    PAGES_EMITTED_TOTAL
        .with_label_values(&["annexure"])
        .inc_by((page_count - 1) as f64);
    timer.observe_duration();

    info!(
        invoice_number = %record.invoice_number,
        pages = page_count,
        mode = document_mode(record),
        "Invoice document assembled"
    );

    InvoiceDocument {
        invoice_number: record.invoice_number.clone(),
        pages,
        totals,
    }
}

fn primary_title(record: &InvoiceRecord) -> &'static str {
    if record.is_untaxed() {
        BILL_OF_SUPPLY_TITLE
    } else {
        TAX_INVOICE_TITLE
    }
}

fn document_mode(record: &InvoiceRecord) -> &'static str {
    if record.is_untaxed() {
        "bill_of_supply"
    } else {
        "tax_invoice"
    }
}

/// Join the present address pieces; absent address degrades to the
/// em-dash placeholder.
fn address_text(parts: &[&Option<String>]) -> String {
    let joined = parts
        .iter()
        .filter_map(|part| part.as_deref())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        MISSING_FIELD_PLACEHOLDER.to_string()
    } else {
        joined
    }
}

fn tax_registration_text(tax_registration: &Option<String>) -> String {
    tax_registration
        .clone()
        .unwrap_or_else(|| UNREGISTERED_PLACEHOLDER.to_string())
}

fn billed_party_block(party: &PartyDetails) -> PartyBlock {
    PartyBlock {
        name: party.name.clone(),
        address: address_text(&[
            &party.address_line1,
            &party.address_line2,
            &party.city,
            &party.state,
            &party.postal_code,
        ]),
        tax_registration: tax_registration_text(&party.tax_registration),
    }
}

fn issuing_entity_block(entity: &IssuingEntity) -> PartyBlock {
    PartyBlock {
        name: entity.name.clone(),
        address: address_text(&[
            &entity.address_line1,
            &entity.address_line2,
            &entity.city,
            &entity.state,
            &entity.postal_code,
        ]),
        tax_registration: tax_registration_text(&entity.tax_registration),
    }
}

fn footer_of(entity: &IssuingEntity) -> PageFooter {
    let contact = match (entity.phone.as_deref(), entity.email.as_deref()) {
        (Some(phone), Some(email)) => format!("{} | {}", phone, email),
        (Some(phone), None) => phone.to_string(),
        (None, Some(email)) => email.to_string(),
        (None, None) => MISSING_FIELD_PLACEHOLDER.to_string(),
    };
    PageFooter {
        issued_by: entity.name.clone(),
        contact,
    }
}
