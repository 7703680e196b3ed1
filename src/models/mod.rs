use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils;

/// Lifecycle state of an invoice. Transitions are user-driven; any status is
/// reachable from any other, but new and duplicated invoices start at `Draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 4] = [
        InvoiceStatus::Draft,
        InvoiceStatus::Sent,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
        }
    }

    /// The two-state skin's "unpaid" is everything except `Paid`.
    pub fn is_paid(self) -> bool {
        matches!(self, InvoiceStatus::Paid)
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub description: String,
    pub quantity: f64,
    pub rate: f64,
    /// Always `quantity * rate`; produced by the calculation module, never set
    /// independently.
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    pub client_name: String,
    pub client_email: String,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub items: Vec<LineItem>,
    pub subtotal: f64,
    pub tax_rate: f64,
    pub tax_amount: f64,
    pub total: f64,
    pub status: InvoiceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Invoice {
    pub fn summary(&self) -> InvoiceSummary {
        InvoiceSummary {
            id: self.id.clone(),
            invoice_number: self.invoice_number.clone(),
            client_name: self.client_name.clone(),
            date: self.date,
            total: self.total,
            status: self.status,
        }
    }
}

/// Uncommitted editor form state. Totals and per-item amounts are always
/// derived on commit, never taken from the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub invoice_number: String,
    pub client_name: String,
    pub client_email: String,
    pub date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub tax_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl InvoiceDraft {
    /// Blank form defaults: a time-derived number, today's date, 10% tax.
    pub fn prefilled() -> Self {
        InvoiceDraft {
            invoice_number: utils::next_invoice_number(),
            client_name: String::new(),
            client_email: String::new(),
            date: utils::today(),
            due_date: None,
            tax_rate: 10.0,
            logo: None,
        }
    }

    /// Form state for editing an existing invoice.
    pub fn for_invoice(invoice: &Invoice) -> Self {
        InvoiceDraft {
            invoice_number: invoice.invoice_number.clone(),
            client_name: invoice.client_name.clone(),
            client_email: invoice.client_email.clone(),
            date: invoice.date,
            due_date: Some(invoice.due_date),
            tax_rate: invoice.tax_rate,
            logo: invoice.logo.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub id: String,
    pub description: String,
    pub quantity: f64,
    pub rate: f64,
}

impl From<&LineItem> for ItemDraft {
    fn from(item: &LineItem) -> Self {
        ItemDraft {
            id: item.id.clone(),
            description: item.description.clone(),
            quantity: item.quantity,
            rate: item.rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    pub id: String,
    pub invoice_number: String,
    pub client_name: String,
    pub date: NaiveDate,
    pub total: f64,
    pub status: InvoiceStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSlice {
    pub status: InvoiceStatus,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_invoices: usize,
    pub total_revenue: f64,
    pub paid_count: usize,
    pub paid_amount: f64,
    pub unpaid_amount: f64,
    pub overdue_count: usize,
    /// Rounded percentage of invoices whose status is `paid`; 0 for an empty
    /// collection.
    pub completion_rate: u32,
    pub status_breakdown: Vec<StatusSlice>,
    pub recent_activity: Vec<InvoiceSummary>,
}
