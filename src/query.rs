//! Filter and sort over a repository snapshot. Pure and stateless; the list
//! view recomputes these on every render.

use crate::models::Invoice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Amount,
    Client,
}

impl SortKey {
    /// Maps the select-box values; unknown keys sort as identity via `None`.
    pub fn parse(key: &str) -> Option<SortKey> {
        match key {
            "date" => Some(SortKey::Date),
            "amount" => Some(SortKey::Amount),
            "client" => Some(SortKey::Client),
            _ => None,
        }
    }
}

/// Case-insensitive substring match against client name or invoice number.
/// Empty text returns the full collection, order preserved.
pub fn filter<'a>(invoices: &'a [Invoice], text: &str) -> Vec<&'a Invoice> {
    if text.is_empty() {
        return invoices.iter().collect();
    }
    let needle = text.to_lowercase();
    invoices
        .iter()
        .filter(|invoice| {
            invoice.client_name.to_lowercase().contains(&needle)
                || invoice.invoice_number.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Stable sort: date and amount descending, client ascending
/// case-insensitively. `None` leaves the order untouched.
pub fn sort<'a>(mut invoices: Vec<&'a Invoice>, key: Option<SortKey>) -> Vec<&'a Invoice> {
    match key {
        Some(SortKey::Date) => invoices.sort_by(|a, b| b.date.cmp(&a.date)),
        Some(SortKey::Amount) => invoices.sort_by(|a, b| b.total.total_cmp(&a.total)),
        Some(SortKey::Client) => invoices.sort_by(|a, b| {
            a.client_name
                .to_lowercase()
                .cmp(&b.client_name.to_lowercase())
        }),
        None => {}
    }
    invoices
}

/// Filter-then-sort, the composition every list render uses.
pub fn view<'a>(invoices: &'a [Invoice], text: &str, key: Option<SortKey>) -> Vec<&'a Invoice> {
    sort(filter(invoices, text), key)
}
