//! Money and tax computation.
//!
//! All summation happens on unrounded `Decimal` values; rounding to two
//! decimal places applies only when a value is placed into a display
//! position. Under the even CGST/SGST split the two displayed halves may
//! together differ from the displayed tax total by one paisa (e.g. a 0.03
//! total splits into 0.02 + 0.02). That slack is accepted and bounded to one
//! minimum currency unit.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{LineItem, TaxBreakdown, TaxComponent};

/// Names of the two halves of the flat tax split, in display order.
pub const TAX_COMPONENT_NAMES: [&str; 2] = ["CGST", "SGST"];

/// Round a monetary value for display placement.
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum of net amounts, unrounded.
pub fn subtotal_of(items: &[LineItem]) -> Decimal {
    items.iter().map(|item| item.net_amount).sum()
}

/// Compute the document money summary for a list of items and a total tax
/// rate. A zero rate selects untaxed mode: no tax components and a grand
/// total equal to the subtotal.
pub fn compute_totals(items: &[LineItem], tax_rate_percent: Decimal) -> TaxBreakdown {
    let subtotal = subtotal_of(items);

    if tax_rate_percent.is_zero() {
        return TaxBreakdown {
            subtotal,
            tax_components: Vec::new(),
            tax_total: Decimal::ZERO,
            grand_total: subtotal,
        };
    }

    let tax_total = subtotal * tax_rate_percent / Decimal::ONE_HUNDRED;
    let half_rate = tax_rate_percent / Decimal::TWO;
    let half_amount = tax_total / Decimal::TWO;

    let tax_components = TAX_COMPONENT_NAMES
        .iter()
        .map(|name| TaxComponent {
            name: (*name).to_string(),
            rate_percent: half_rate,
            amount: round_display(half_amount),
        })
        .collect();

    TaxBreakdown {
        subtotal,
        tax_components,
        tax_total: round_display(tax_total),
        grand_total: round_display(subtotal + tax_total),
    }
}
