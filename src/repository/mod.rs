//! The owning invoice collection and its mutation operations. Readers only
//! ever see `invoices()` as an immutable snapshot; every mutation goes
//! through a method here, recomputes totals, and writes the whole collection
//! through to the blob store.

use anyhow::Context;
use tracing::{debug, info, warn};

use crate::calc;
use crate::error::{Error, Result};
use crate::models::{Invoice, InvoiceDraft, InvoiceStatus, ItemDraft};
use crate::seed;
use crate::store::{BlobStore, INVOICES_KEY};
use crate::utils;
use crate::validation;

pub struct Repository {
    invoices: Vec<Invoice>,
    store: Box<dyn BlobStore>,
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("invoices", &self.invoices)
            .finish_non_exhaustive()
    }
}

impl Repository {
    /// One-shot startup read. A missing key seeds the built-in sample
    /// collection; an unreadable blob is surfaced rather than silently
    /// reseeded, since the next write-through would overwrite user data.
    pub fn load(store: Box<dyn BlobStore>) -> Result<Self> {
        let invoices = match store.read(INVOICES_KEY)? {
            Some(raw) => {
                let invoices: Vec<Invoice> = serde_json::from_str(&raw)
                    .context("decode invoices blob")
                    .map_err(Error::Persistence)?;
                debug!(count = invoices.len(), "loaded invoices from store");
                invoices
            }
            None => {
                info!("no stored invoices, seeding sample collection");
                seed::sample_invoices()
            }
        };
        Ok(Repository { invoices, store })
    }

    /// The immutable snapshot the query and dashboard modules consume.
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn find(&self, id: &str) -> Option<&Invoice> {
        self.invoices.iter().find(|invoice| invoice.id == id)
    }

    /// Validates, derives totals, assigns a fresh id, forces `Draft`, and
    /// prepends so the newest invoice displays first.
    pub fn create(&mut self, draft: &InvoiceDraft, items: &[ItemDraft]) -> Result<&Invoice> {
        validation::validate(draft, items).into_result()?;
        let invoice = build_invoice(utils::new_id(), draft, items, InvoiceStatus::Draft);
        info!(id = %invoice.id, number = %invoice.invoice_number, "created invoice");
        self.invoices.insert(0, invoice);
        self.persist()?;
        Ok(&self.invoices[0])
    }

    /// Replaces the record in place, preserving collection order and the
    /// record's current status; all other fields come from the draft.
    pub fn update(&mut self, id: &str, draft: &InvoiceDraft, items: &[ItemDraft]) -> Result<&Invoice> {
        validation::validate(draft, items).into_result()?;
        let pos = self
            .invoices
            .iter()
            .position(|invoice| invoice.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        let status = self.invoices[pos].status;
        self.invoices[pos] = build_invoice(id.to_string(), draft, items, status);
        info!(id, "updated invoice");
        self.persist()?;
        Ok(&self.invoices[pos])
    }

    /// Idempotent: deleting an unknown id leaves the collection (and the
    /// persisted blob) untouched.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.invoices.len();
        self.invoices.retain(|invoice| invoice.id != id);
        if self.invoices.len() == before {
            debug!(id, "delete ignored unknown invoice");
            return Ok(());
        }
        info!(id, "deleted invoice");
        self.persist()
    }

    /// Copies every field, with a fresh id, a time-derived invoice number,
    /// today's issue date, and `Draft` status; prepends like `create`.
    pub fn duplicate(&mut self, id: &str) -> Result<&Invoice> {
        let source = self
            .find(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        let mut copy = source.clone();
        copy.id = utils::new_id();
        copy.invoice_number = utils::next_invoice_number();
        copy.date = utils::today();
        copy.status = InvoiceStatus::Draft;
        info!(id = %copy.id, source = id, "duplicated invoice");
        self.invoices.insert(0, copy);
        self.persist()?;
        Ok(&self.invoices[0])
    }

    /// No transition table: any status is accepted from any other.
    pub fn set_status(&mut self, id: &str, status: InvoiceStatus) -> Result<()> {
        let invoice = self
            .invoices
            .iter_mut()
            .find(|invoice| invoice.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        invoice.status = status;
        info!(id, %status, "changed invoice status");
        self.persist()
    }

    /// Pretty-printed JSON of the whole collection for the clipboard
    /// collaborator; read-only, same shape as the persisted blob.
    pub fn export_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(&self.invoices)
            .context("serialize invoices for export")
            .map_err(Error::Persistence)?;
        Ok(json)
    }

    /// Write-through after a successful mutation. A failed write surfaces as
    /// `Error::Persistence` but never rolls back the in-memory state, which
    /// stays authoritative for the session.
    fn persist(&mut self) -> Result<()> {
        let payload = serde_json::to_string(&self.invoices)
            .context("serialize invoices")
            .map_err(Error::Persistence)?;
        if let Err(err) = self.store.write(INVOICES_KEY, &payload) {
            warn!(error = %err, "write-through failed, in-memory state kept");
            return Err(Error::Persistence(err));
        }
        Ok(())
    }
}

fn build_invoice(id: String, draft: &InvoiceDraft, items: &[ItemDraft], status: InvoiceStatus) -> Invoice {
    let items = calc::build_items(items);
    let totals = calc::compute_totals(&items, draft.tax_rate);
    Invoice {
        id,
        invoice_number: draft.invoice_number.clone(),
        client_name: draft.client_name.clone(),
        client_email: draft.client_email.clone(),
        date: draft.date,
        // validation rejects a missing due date before this runs
        due_date: draft.due_date.unwrap_or(draft.date),
        items,
        subtotal: totals.subtotal,
        tax_rate: draft.tax_rate,
        tax_amount: totals.tax_amount,
        total: totals.total,
        status,
        logo: draft.logo.clone(),
    }
}
