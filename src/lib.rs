//! Core invoice engine behind the Factura skins: the data model, the derived
//! totals arithmetic, the owning repository with write-through persistence,
//! and the pure query/aggregation functions the list view and dashboard
//! render from. Presentation layers stay outside this crate and only call
//! the operations exposed here.

pub mod calc;
pub mod dashboard;
mod error;
pub mod models;
pub mod query;
mod repository;
pub mod seed;
pub mod store;
pub mod utils;
pub mod validation;

pub use error::{Error, Result};
pub use models::{
    DashboardStats, Invoice, InvoiceDraft, InvoiceStatus, InvoiceSummary, ItemDraft, LineItem,
    StatusSlice,
};
pub use repository::Repository;
pub use validation::ValidationErrors;
