//! Annexure pagination planning.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{LineItem, RecordRow, MISSING_FIELD_PLACEHOLDER};

/// One annexure page worth of record charges.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnexureChunk {
    pub rows: Vec<RecordRow>,
    /// Sum of this chunk's net amounts, on unrounded values, so chunk
    /// subtotals always reconcile exactly with the record-charge total.
    pub subtotal: Decimal,
}

/// Split record charges into chunks of at most `page_capacity` items,
/// covering every item exactly once in original order. Row serials are
/// contiguous across chunks: the k-th record charge overall gets serial k.
///
/// Capacity is validated by `EngineConfig`; passing zero here is a
/// programming error.
pub fn plan_annexures(record_charges: &[LineItem], page_capacity: usize) -> Vec<AnnexureChunk> {
    assert!(page_capacity >= 1, "page capacity must be at least 1");

    let mut chunks = Vec::with_capacity(record_charges.len().div_ceil(page_capacity));
    for (chunk_index, slice) in record_charges.chunks(page_capacity).enumerate() {
        let rows = slice
            .iter()
            .enumerate()
            .map(|(offset, item)| RecordRow {
                serial: (chunk_index * page_capacity + offset + 1) as u32,
                record_ref: item
                    .record_ref
                    .clone()
                    .unwrap_or_else(|| MISSING_FIELD_PLACEHOLDER.to_string()),
                description: item.description.clone(),
                gross_amount: item.gross_amount,
                discount: item.discount,
                net_amount: item.net_amount,
            })
            .collect();
        let subtotal = slice.iter().map(|item| item.net_amount).sum();
        chunks.push(AnnexureChunk { rows, subtotal });
    }

    debug!(
        record_charges = record_charges.len(),
        page_capacity,
        chunks = chunks.len(),
        "Annexure plan computed"
    );

    chunks
}
