//! Test helper module for invoice-engine integration tests.
//!
//! Provides builders for invoice records, party blocks, and line items.

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::NaiveDate;
use invoice_engine::models::{
    BankDetails, InvoiceRecord, IssuingEntity, LineItem, PartyDetails, DEFAULT_TAX_CODE,
};
use rust_decimal::Decimal;

pub const TEST_INVOICE_NUMBER: &str = "HSP-2026-0042";
pub const TEST_AMOUNT_IN_WORDS: &str = "Rupees Four Thousand One Hundred Thirty Only";

// Counter for unique line item ids
static ITEM_COUNTER: AtomicI64 = AtomicI64::new(1);

fn next_item_id() -> i64 {
    ITEM_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Whole-rupee amount.
pub fn rupees(amount: i64) -> Decimal {
    Decimal::new(amount, 0)
}

/// Amount expressed in paise.
pub fn paise(amount: i64) -> Decimal {
    Decimal::new(amount, 2)
}

/// Percentage rate.
pub fn percent(rate: i64) -> Decimal {
    Decimal::new(rate, 0)
}

pub fn registration_fee(amount: Decimal) -> LineItem {
    LineItem {
        line_item_id: next_item_id(),
        record_ref: None,
        description: "Registration Fee".to_string(),
        gross_amount: amount,
        discount: Decimal::ZERO,
        net_amount: amount,
        tax_code: DEFAULT_TAX_CODE.to_string(),
    }
}

pub fn record_charge(record_number: u32, amount: Decimal) -> LineItem {
    LineItem {
        line_item_id: next_item_id(),
        record_ref: Some(format!("PR-{:04}", record_number)),
        description: format!("Processing of patient record PR-{:04}", record_number),
        gross_amount: amount,
        discount: Decimal::ZERO,
        net_amount: amount,
        tax_code: DEFAULT_TAX_CODE.to_string(),
    }
}

pub fn custom_charge(description: &str, amount: Decimal) -> LineItem {
    LineItem {
        line_item_id: next_item_id(),
        record_ref: None,
        description: description.to_string(),
        gross_amount: amount,
        discount: Decimal::ZERO,
        net_amount: amount,
        tax_code: DEFAULT_TAX_CODE.to_string(),
    }
}

/// A sequence of record charges, all at the same amount.
pub fn record_charges(count: u32, amount: Decimal) -> Vec<LineItem> {
    (1..=count).map(|n| record_charge(n, amount)).collect()
}

pub fn bank_details() -> BankDetails {
    BankDetails {
        account_name: "MedLedger Systems Pvt Ltd".to_string(),
        account_number: "50200012345678".to_string(),
        ifsc: "HDFC0000123".to_string(),
        bank_name: "HDFC Bank".to_string(),
        branch: Some("Fort, Mumbai".to_string()),
    }
}

pub fn billed_party() -> PartyDetails {
    PartyDetails {
        name: "City Care Hospital".to_string(),
        address_line1: Some("12 Lake View Road".to_string()),
        address_line2: None,
        city: Some("Pune".to_string()),
        state: Some("Maharashtra".to_string()),
        postal_code: Some("411001".to_string()),
        tax_registration: Some("27AAACC1234F1Z5".to_string()),
    }
}

pub fn issuing_entity() -> IssuingEntity {
    IssuingEntity {
        name: "MedLedger Systems Pvt Ltd".to_string(),
        address_line1: Some("4th Floor, Trade Centre".to_string()),
        address_line2: None,
        city: Some("Mumbai".to_string()),
        state: Some("Maharashtra".to_string()),
        postal_code: Some("400001".to_string()),
        tax_registration: Some("27AABCM9988E1ZK".to_string()),
        phone: Some("+91 22 4000 1234".to_string()),
        email: Some("billing@medledger.example".to_string()),
        bank: Some(bank_details()),
    }
}

pub fn invoice_with_items(items: Vec<LineItem>, tax_rate_percent: Decimal) -> InvoiceRecord {
    InvoiceRecord {
        invoice_number: TEST_INVOICE_NUMBER.to_string(),
        issue_date: NaiveDate::from_ymd_opt(2026, 7, 31).expect("valid date"),
        billed_party: billed_party(),
        issuing_entity: issuing_entity(),
        tax_rate_percent,
        items,
        amount_in_words: TEST_AMOUNT_IN_WORDS.to_string(),
    }
}
