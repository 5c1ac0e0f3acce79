//! Quote engine
//!
//! Computes a price estimate from selected menu items, a guest count and
//! the caterer's pricing configuration. Pure computation over fetched
//! data; nothing here touches the store.

pub mod money;

use serde::{Deserialize, Serialize};

use self::money::{to_decimal, to_f64};
use crate::db::models::{DiscountTier, MenuItem};
use crate::db::repository::record_key;
use rust_decimal::Decimal;
use shared::{AppError, error::AppResult};

/// One selected item of a quote or booking request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteItemInput {
    /// Menu item ID ("menu_item:xyz" or bare key)
    pub item_id: String,
    pub quantity: u32,
}

/// One resolved line of a quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteLine {
    pub item_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

/// Computed price estimate (never persisted)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub items: Vec<QuoteLine>,
    pub guest_count: u32,
    /// Σ unit_price × quantity × guest_count over resolved items
    pub subtotal: f64,
    /// Caterer's flat fee, added before discount
    pub misc_cost: f64,
    /// Selected tier's percentage (0 when no tier qualifies)
    pub discount_percent: f64,
    /// (subtotal + misc_cost) × discount_percent / 100
    pub discount_amount: f64,
    /// subtotal / guest_count, 2dp, display only
    pub per_plate_cost: f64,
    /// max(0, subtotal + misc_cost - discount_amount)
    pub total_cost: f64,
}

/// Select the discount for a guest count
///
/// Among tiers with `min_guests <= guest_count`, the one with the largest
/// `min_guests` wins. No qualifying tier means no discount.
pub fn select_discount_percent(tiers: &[DiscountTier], guest_count: u32) -> f64 {
    tiers
        .iter()
        .filter(|t| t.min_guests <= guest_count)
        .max_by_key(|t| t.min_guests)
        .map(|t| t.discount_percent)
        .unwrap_or(0.0)
}

/// Build a quote from the caterer's catalog and pricing configuration
///
/// Selections that do not resolve to an orderable catalog item are
/// silently dropped; quoting never fails over a stale item id.
///
/// # Errors
///
/// `ValidationFailed` when `guest_count < 1` or the selection list is
/// empty. Caterer existence is the caller's concern.
pub fn build_quote(
    catalog: &[MenuItem],
    tiers: &[DiscountTier],
    misc_cost: f64,
    selections: &[QuoteItemInput],
    guest_count: u32,
) -> AppResult<Quote> {
    if guest_count < 1 {
        return Err(AppError::validation("guest count must be at least 1"));
    }
    if selections.is_empty() {
        return Err(AppError::validation("at least one item must be selected"));
    }

    let guests = Decimal::from(guest_count);
    let mut lines = Vec::new();
    let mut subtotal = Decimal::ZERO;

    for selection in selections {
        if selection.quantity == 0 {
            continue;
        }
        let key = record_key("menu_item", &selection.item_id);
        let Some(item) = catalog.iter().find(|item| {
            item.is_active
                && item.is_available
                && item
                    .id
                    .as_ref()
                    .is_some_and(|id| id.key().to_string() == key)
        }) else {
            // Not found or unavailable: excluded from the computation
            continue;
        };

        let quantity = Decimal::from(selection.quantity);
        subtotal += to_decimal(item.price) * quantity * guests;

        lines.push(QuoteLine {
            item_id: item.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            name: item.name.clone(),
            quantity: selection.quantity,
            unit_price: item.price,
        });
    }

    let misc = to_decimal(misc_cost);
    let discount_percent = select_discount_percent(tiers, guest_count);
    let discount_amount =
        (subtotal + misc) * to_decimal(discount_percent) / Decimal::ONE_HUNDRED;
    let total_cost = (subtotal + misc - discount_amount).max(Decimal::ZERO);
    let per_plate_cost = subtotal / guests;

    Ok(Quote {
        items: lines,
        guest_count,
        subtotal: to_f64(subtotal),
        misc_cost: to_f64(misc),
        discount_percent,
        discount_amount: to_f64(discount_amount),
        per_plate_cost: to_f64(per_plate_cost),
        total_cost: to_f64(total_cost),
    })
}

#[cfg(test)]
mod tests;
