//! Item classifier and grouper tests for invoice-engine.

mod common;

use common::{custom_charge, record_charge, record_charges, registration_fee, rupees};
use invoice_engine::services::classifier::{
    classify, summary_rows, REGISTRATION_FEE_MARKER,
};

#[test]
fn groups_are_disjoint_and_preserve_order() {
    let items = vec![
        custom_charge("Courier charges", rupees(80)),
        registration_fee(rupees(500)),
        record_charge(1, rupees(100)),
        custom_charge("Report reprint", rupees(40)),
        record_charge(2, rupees(100)),
    ];

    let classified = classify(&items);

    assert_eq!(classified.registration_fees.len(), 1);
    assert_eq!(classified.record_charges.len(), 2);
    assert_eq!(classified.custom_charges.len(), 2);
    assert_eq!(
        classified.registration_fees.len()
            + classified.record_charges.len()
            + classified.custom_charges.len(),
        items.len()
    );
    assert_eq!(classified.custom_charges[0].description, "Courier charges");
    assert_eq!(classified.custom_charges[1].description, "Report reprint");
    assert_eq!(classified.record_charges[0].record_ref.as_deref(), Some("PR-0001"));
    assert_eq!(classified.record_charges[1].record_ref.as_deref(), Some("PR-0002"));
}

#[test]
fn marker_match_is_exact() {
    let items = vec![custom_charge("registration fee", rupees(500))];

    let classified = classify(&items);

    assert!(classified.registration_fees.is_empty());
    assert_eq!(classified.custom_charges.len(), 1);
}

#[test]
fn marker_wins_over_record_ref() {
    let mut fee = registration_fee(rupees(500));
    fee.record_ref = Some("PR-0001".to_string());

    let classified = classify(&[fee]);

    assert_eq!(classified.registration_fees.len(), 1);
    assert!(classified.record_charges.is_empty());
}

#[test]
fn multiple_fees_merge_into_single_summary_row() {
    let items = vec![
        registration_fee(rupees(500)),
        record_charge(1, rupees(100)),
        registration_fee(rupees(250)),
    ];

    let rows = summary_rows(&classify(&items));

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].description, REGISTRATION_FEE_MARKER);
    assert_eq!(rows[0].amount, rupees(750));
}

#[test]
fn aggregate_row_counts_records() {
    let items = record_charges(30, rupees(100));

    let rows = summary_rows(&classify(&items));

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "Processing of 30 patient records");
    assert_eq!(rows[0].amount, rupees(3000));
}

#[test]
fn numbering_follows_group_presence_order() {
    let mut items = vec![registration_fee(rupees(500))];
    items.extend(record_charges(3, rupees(100)));
    items.push(custom_charge("Courier charges", rupees(80)));
    items.push(custom_charge("Report reprint", rupees(40)));

    let rows = summary_rows(&classify(&items));

    assert_eq!(rows.len(), 4);
    let serials: Vec<u32> = rows.iter().map(|r| r.serial).collect();
    assert_eq!(serials, vec![1, 2, 3, 4]);
    assert_eq!(rows[0].description, REGISTRATION_FEE_MARKER);
    assert_eq!(rows[1].description, "Processing of 3 patient records");
    assert_eq!(rows[2].description, "Courier charges");
    assert_eq!(rows[3].description, "Report reprint");
}

#[test]
fn numbering_skips_empty_groups() {
    let items = vec![
        custom_charge("Courier charges", rupees(80)),
        custom_charge("Report reprint", rupees(40)),
    ];

    let rows = summary_rows(&classify(&items));

    let serials: Vec<u32> = rows.iter().map(|r| r.serial).collect();
    assert_eq!(serials, vec![1, 2]);
}

#[test]
fn empty_items_yield_no_rows() {
    let rows = summary_rows(&classify(&[]));
    assert!(rows.is_empty());
}
