//! Dashboard metrics derived from a repository snapshot. Everything is
//! recomputed from scratch per call; the collection is small and mutations
//! are human-driven.

use crate::models::{DashboardStats, Invoice, InvoiceStatus, InvoiceSummary, StatusSlice};

pub const RECENT_ACTIVITY_LIMIT: usize = 5;

pub fn stats(invoices: &[Invoice]) -> DashboardStats {
    let total_invoices = invoices.len();
    let total_revenue: f64 = invoices.iter().map(|invoice| invoice.total).sum();

    let paid_count = invoices
        .iter()
        .filter(|invoice| invoice.status.is_paid())
        .count();
    let paid_amount: f64 = invoices
        .iter()
        .filter(|invoice| invoice.status.is_paid())
        .map(|invoice| invoice.total)
        .sum();
    let unpaid_amount = total_revenue - paid_amount;

    let overdue_count = invoices
        .iter()
        .filter(|invoice| invoice.status == InvoiceStatus::Overdue)
        .count();

    let completion_rate = percentage(paid_count, total_invoices).round() as u32;

    let status_breakdown = InvoiceStatus::ALL
        .iter()
        .map(|&status| {
            let count = invoices
                .iter()
                .filter(|invoice| invoice.status == status)
                .count();
            StatusSlice {
                status,
                count,
                percentage: percentage(count, total_invoices),
            }
        })
        .collect();

    DashboardStats {
        total_invoices,
        total_revenue,
        paid_count,
        paid_amount,
        unpaid_amount,
        overdue_count,
        completion_rate,
        status_breakdown,
        recent_activity: recent_activity(invoices),
    }
}

/// The five most recently issued invoices, most recent first; collection
/// order breaks date ties.
fn recent_activity(invoices: &[Invoice]) -> Vec<InvoiceSummary> {
    let mut by_date: Vec<&Invoice> = invoices.iter().collect();
    by_date.sort_by(|a, b| b.date.cmp(&a.date));
    by_date
        .into_iter()
        .take(RECENT_ACTIVITY_LIMIT)
        .map(Invoice::summary)
        .collect()
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineItem;
    use chrono::NaiveDate;

    fn invoice(id: &str, date: (i32, u32, u32), total: f64, status: InvoiceStatus) -> Invoice {
        Invoice {
            id: id.into(),
            invoice_number: format!("INV-2024-{:03}", id.parse::<u32>().unwrap()),
            client_name: format!("Client {id}"),
            client_email: format!("client{id}@example.com"),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            due_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            items: vec![LineItem {
                id: "1".into(),
                description: "work".into(),
                quantity: 1.0,
                rate: total,
                amount: total,
            }],
            subtotal: total,
            tax_rate: 0.0,
            tax_amount: 0.0,
            total,
            status,
            logo: None,
        }
    }

    #[test]
    fn empty_collection_yields_zeroes_not_division_faults() {
        let stats = stats(&[]);
        assert_eq!(stats.total_invoices, 0);
        assert_eq!(stats.total_revenue, 0.0);
        assert_eq!(stats.completion_rate, 0);
        assert!(stats.recent_activity.is_empty());
        for slice in &stats.status_breakdown {
            assert_eq!(slice.count, 0);
            assert_eq!(slice.percentage, 0.0);
        }
    }

    #[test]
    fn totals_and_completion_match_the_three_invoice_scenario() {
        let invoices = vec![
            invoice("1", (2024, 3, 15), 5170.0, InvoiceStatus::Paid),
            invoice("2", (2024, 3, 18), 3465.0, InvoiceStatus::Sent),
            invoice("3", (2024, 3, 20), 2530.0, InvoiceStatus::Draft),
        ];
        let stats = stats(&invoices);
        assert_eq!(stats.total_revenue, 11165.0);
        assert_eq!(stats.paid_amount, 5170.0);
        assert_eq!(stats.unpaid_amount, 5995.0);
        assert_eq!(stats.paid_count, 1);
        assert_eq!(stats.overdue_count, 0);
        // 1 of 3, rounded
        assert_eq!(stats.completion_rate, 33);
    }

    #[test]
    fn histogram_covers_all_four_statuses_in_order() {
        let invoices = vec![
            invoice("1", (2024, 3, 1), 100.0, InvoiceStatus::Paid),
            invoice("2", (2024, 3, 2), 100.0, InvoiceStatus::Paid),
            invoice("3", (2024, 3, 3), 100.0, InvoiceStatus::Overdue),
            invoice("4", (2024, 3, 4), 100.0, InvoiceStatus::Draft),
        ];
        let stats = stats(&invoices);
        let breakdown = &stats.status_breakdown;
        assert_eq!(breakdown.len(), 4);
        assert_eq!(breakdown[0].status, InvoiceStatus::Draft);
        assert_eq!(breakdown[0].count, 1);
        assert_eq!(breakdown[1].status, InvoiceStatus::Sent);
        assert_eq!(breakdown[1].count, 0);
        assert_eq!(breakdown[1].percentage, 0.0);
        assert_eq!(breakdown[2].status, InvoiceStatus::Paid);
        assert_eq!(breakdown[2].count, 2);
        assert_eq!(breakdown[2].percentage, 50.0);
        assert_eq!(breakdown[3].status, InvoiceStatus::Overdue);
        assert_eq!(breakdown[3].count, 1);
        assert_eq!(stats.overdue_count, 1);
    }

    #[test]
    fn recent_activity_takes_five_newest_with_stable_ties() {
        let invoices = vec![
            invoice("1", (2024, 3, 10), 100.0, InvoiceStatus::Draft),
            invoice("2", (2024, 3, 20), 100.0, InvoiceStatus::Draft),
            invoice("3", (2024, 3, 20), 100.0, InvoiceStatus::Draft),
            invoice("4", (2024, 3, 5), 100.0, InvoiceStatus::Draft),
            invoice("5", (2024, 3, 18), 100.0, InvoiceStatus::Draft),
            invoice("6", (2024, 3, 1), 100.0, InvoiceStatus::Draft),
            invoice("7", (2024, 3, 25), 100.0, InvoiceStatus::Draft),
        ];
        let stats = stats(&invoices);
        let ids: Vec<_> = stats
            .recent_activity
            .iter()
            .map(|summary| summary.id.as_str())
            .collect();
        assert_eq!(ids, ["7", "2", "3", "5", "1"]);
    }
}
