//! Pure money arithmetic. The only producers of `amount`, `subtotal`,
//! `tax_amount`, and `total` anywhere in the crate; every mutation path runs
//! through here before anything is persisted.

use crate::models::{ItemDraft, LineItem};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
}

/// `quantity * rate`. Negative inputs pass through untouched; rejecting them
/// is the validation layer's concern.
pub fn compute_amount(quantity: f64, rate: f64) -> f64 {
    quantity * rate
}

/// Materialize draft items into line items with derived amounts.
pub fn build_items(drafts: &[ItemDraft]) -> Vec<LineItem> {
    drafts
        .iter()
        .map(|draft| LineItem {
            id: draft.id.clone(),
            description: draft.description.clone(),
            quantity: draft.quantity,
            rate: draft.rate,
            amount: compute_amount(draft.quantity, draft.rate),
        })
        .collect()
}

pub fn compute_totals(items: &[LineItem], tax_rate: f64) -> Totals {
    let subtotal: f64 = items.iter().map(|item| item.amount).sum();
    let tax_amount = subtotal * (tax_rate / 100.0);
    Totals {
        subtotal,
        tax_amount,
        total: subtotal + tax_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(id: &str, quantity: f64, rate: f64) -> ItemDraft {
        ItemDraft {
            id: id.into(),
            description: "work".into(),
            quantity,
            rate,
        }
    }

    #[test]
    fn amount_is_quantity_times_rate() {
        assert_eq!(compute_amount(3.0, 850.0), 2550.0);
        assert_eq!(compute_amount(0.0, 100.0), 0.0);
    }

    #[test]
    fn amounts_track_every_edit() {
        let mut items = build_items(&[draft("1", 1.0, 3500.0)]);
        assert_eq!(items[0].amount, 3500.0);

        // quantity edit rebuilds the item through the draft path
        items = build_items(&[draft("1", 2.0, 3500.0)]);
        assert_eq!(items[0].amount, 7000.0);

        items = build_items(&[draft("1", 2.0, 10.5)]);
        assert_eq!(items[0].amount, 21.0);
    }

    #[test]
    fn totals_match_the_editor_scenario() {
        let items = build_items(&[draft("1", 1.0, 3500.0), draft("2", 1.0, 1200.0)]);
        let totals = compute_totals(&items, 10.0);
        assert_eq!(totals.subtotal, 4700.0);
        assert_eq!(totals.tax_amount, 470.0);
        assert_eq!(totals.total, 5170.0);
    }

    #[test]
    fn empty_items_total_to_zero() {
        let totals = compute_totals(&[], 10.0);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.tax_amount, 0.0);
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn negative_inputs_are_not_rejected_here() {
        assert_eq!(compute_amount(-1.0, 50.0), -50.0);
    }
}
