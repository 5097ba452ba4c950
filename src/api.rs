//! # API Facade
//!
//! Single entry point for all record operations. The facade owns the store
//! and the persistence backend, triggers a full save after every mutation,
//! and returns structured [`CmdResult`] values instead of printing.
//!
//! ## Generic Over Backend
//!
//! `Crm<B: Backend>` is generic over the storage backend:
//! - Production: `Crm<FileBackend>`
//! - Testing: `Crm<MemoryBackend>`
//!
//! ## Failure Policy
//!
//! - Load failure degrades to an empty store with an error-level message;
//!   the process keeps running.
//! - Save failure is reported as a warning message; the in-memory store
//!   remains authoritative and the operation still counts as done.
//! - Unknown ids on update/delete return `CrmError::CustomerNotFound` and
//!   leave the store untouched.

use crate::error::{CrmError, Result};
use crate::model::{Category, Customer};
use crate::persist::Backend;
use crate::store::{CustomerStore, CustomerUpdate, Statistics};
use crate::validate;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Customer>,
    pub listed: Vec<Customer>,
    pub statistics: Option<Statistics>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, customers: Vec<Customer>) -> Self {
        self.listed = customers;
        self
    }

    pub fn with_statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = Some(statistics);
        self
    }
}

/// The main facade for record operations. All UI clients interact through
/// this type.
pub struct Crm<B: Backend> {
    store: CustomerStore,
    backend: B,
}

impl<B: Backend> Crm<B> {
    /// Opens the store, loading whatever the backend holds. Never fails:
    /// a load error yields an empty store and an error-level message, and
    /// skipped lines become one warning each.
    pub fn open(backend: B) -> (Self, CmdResult) {
        let mut result = CmdResult::default();

        let store = match backend.load() {
            Ok(report) => {
                for line in &report.skipped {
                    result.add_message(CmdMessage::warning(format!(
                        "Skipped malformed line: {}",
                        line
                    )));
                }
                if report.customers.is_empty() {
                    result.add_message(CmdMessage::info("No data file found, starting empty."));
                } else {
                    result.add_message(CmdMessage::info(format!(
                        "Loaded {} customer(s).",
                        report.customers.len()
                    )));
                }
                CustomerStore::from_records(report.customers)
            }
            Err(e) => {
                result.add_message(CmdMessage::error(format!("Failed to load data: {}", e)));
                CustomerStore::new()
            }
        };

        (Self { store, backend }, result)
    }

    pub fn create(
        &mut self,
        name: String,
        email: String,
        phone: String,
        company: String,
        category: Category,
    ) -> CmdResult {
        let customer = self
            .store
            .create(name, email, phone, company, category)
            .clone();
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Customer '{}' created with id {}.",
            customer.name, customer.id
        )));
        result.affected.push(customer);
        self.persist(&mut result);
        result
    }

    /// Full ordered record set, for the list-all action.
    pub fn list(&self) -> CmdResult {
        CmdResult::default().with_listed(self.store.all().to_vec())
    }

    /// Case-insensitive substring search over name or email. Blank terms
    /// are rejected rather than matching everything.
    pub fn search(&self, term: &str) -> Result<CmdResult> {
        if !validate::valid_query(term) {
            return Err(CrmError::BlankQuery);
        }
        let hits: Vec<Customer> = self.store.search(term).into_iter().cloned().collect();
        let mut result = CmdResult::default();
        if hits.is_empty() {
            result.add_message(CmdMessage::info(format!("No customers match '{}'.", term)));
        } else {
            result.add_message(CmdMessage::info(format!("Found {} result(s).", hits.len())));
        }
        Ok(result.with_listed(hits))
    }

    pub fn find(&self, id: u32) -> Option<Customer> {
        self.store.find_by_id(id).cloned()
    }

    pub fn update(&mut self, id: u32, changes: CustomerUpdate) -> Result<CmdResult> {
        let customer = self
            .store
            .update(id, changes)
            .ok_or(CrmError::CustomerNotFound(id))?
            .clone();

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!("Customer {} updated.", id)));
        result.affected.push(customer);
        self.persist(&mut result);
        Ok(result)
    }

    /// Removes a record. Confirmation is the session's job; by the time this
    /// runs the operator already said yes.
    pub fn delete(&mut self, id: u32) -> Result<CmdResult> {
        let customer = self
            .store
            .delete(id)
            .ok_or(CrmError::CustomerNotFound(id))?;

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Customer '{}' deleted.",
            customer.name
        )));
        result.affected.push(customer);
        self.persist(&mut result);
        Ok(result)
    }

    pub fn statistics(&self) -> CmdResult {
        CmdResult::default().with_statistics(self.store.statistics())
    }

    pub fn store(&self) -> &CustomerStore {
        &self.store
    }

    fn persist(&mut self, result: &mut CmdResult) {
        if let Err(e) = self.backend.save(self.store.all()) {
            result.add_message(CmdMessage::warning(format!(
                "Failed to save data (changes kept in memory): {}",
                e
            )));
        }
    }
}
