//! Spending by category
//!
//! Aggregates costs per category for the overview chart. Colours come from a
//! fixed palette keyed by category, so the same category always renders in
//! the same colour.

use std::collections::BTreeMap;

use crate::models::{Category, Money};
use crate::store::AppState;

/// An sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb`
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// One colour per category, indexed by [`Category::index`]
const PALETTE: [Rgb; 6] = [
    Rgb(0xe6, 0x7e, 0x22), // Food
    Rgb(0x34, 0x98, 0xdb), // Transport
    Rgb(0x2e, 0xcc, 0x71), // Health & Personal Care
    Rgb(0x9b, 0x59, 0xb6), // Travel
    Rgb(0xf1, 0xc4, 0x0f), // Leisure
    Rgb(0xe8, 0x43, 0x93), // Clothing
];

/// Display colour of a category
pub fn category_color(category: Category) -> Rgb {
    PALETTE[category.index()]
}

/// Summed cost per category, one entry per category present
pub fn category_breakdown(state: &AppState) -> BTreeMap<Category, Money> {
    let mut totals = BTreeMap::new();
    for expense in &state.expenses {
        *totals.entry(expense.category).or_insert_with(Money::zero) += expense.cost;
    }
    totals
}

/// A category's portion of total spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub category: Category,
    pub total: Money,
    /// Share of all spending in percent (0 when nothing is spent)
    pub percentage: f64,
    pub color: Rgb,
}

/// Breakdown entries with share and colour, in category order
pub fn breakdown_slices(state: &AppState) -> Vec<CategorySlice> {
    let breakdown = category_breakdown(state);
    let grand_total: Money = breakdown.values().sum();

    breakdown
        .into_iter()
        .map(|(category, total)| {
            let percentage = if grand_total.is_zero() {
                0.0
            } else {
                total.as_f64() / grand_total.as_f64() * 100.0
            };
            CategorySlice {
                category,
                total,
                percentage,
                color: category_color(category),
            }
        })
        .collect()
}
