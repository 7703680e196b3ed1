//! Draft checks that gate every repository commit. Returns a field-name to
//! message map the editor renders inline; an empty map means the draft may be
//! committed.

use std::collections::BTreeMap;
use std::fmt;

use crate::models::{InvoiceDraft, ItemDraft};

/// Field-name → human-readable message. Field names match the serialized
/// invoice keys (`clientName`, `clientEmail`, `dueDate`, `items`) so skins can
/// attach messages to inputs directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// `Ok(())` when the draft may be committed, otherwise the full error set.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    fn add(&mut self, field: &'static str, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

pub fn validate(draft: &InvoiceDraft, items: &[ItemDraft]) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.client_name.trim().is_empty() {
        errors.add("clientName", "Client name is required");
    }

    if draft.client_email.trim().is_empty() {
        errors.add("clientEmail", "Email is required");
    } else if !is_well_formed_email(&draft.client_email) {
        errors.add("clientEmail", "Please enter a valid email");
    }

    if draft.due_date.is_none() {
        errors.add("dueDate", "Due date is required");
    }

    if items.is_empty() {
        errors.add("items", "At least one line item is required");
    } else if items.iter().any(|item| item.description.trim().is_empty()) {
        // one aggregate entry no matter how many items are blank
        errors.add("items", "All items must have a description");
    }

    errors
}

/// Basic `local@domain.tld` shape: a non-whitespace run, `@`, a non-whitespace
/// run, `.`, a non-whitespace run.
fn is_well_formed_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
