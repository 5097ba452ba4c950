use super::{Backend, LoadReport};
use crate::error::{CrmError, Result};
use crate::model::Customer;

/// In-memory backend for testing and development. Does NOT persist data
/// across processes.
#[derive(Default)]
pub struct MemoryBackend {
    records: Vec<Customer>,
    fail_saves: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose next load returns the given records.
    pub fn with_records(records: Vec<Customer>) -> Self {
        Self {
            records,
            fail_saves: false,
        }
    }

    /// Backend whose saves always fail, for exercising the save-failure
    /// path without touching the filesystem.
    pub fn failing() -> Self {
        Self {
            records: Vec::new(),
            fail_saves: true,
        }
    }
}

impl Backend for MemoryBackend {
    fn load(&self) -> Result<LoadReport> {
        Ok(LoadReport {
            customers: self.records.clone(),
            skipped: Vec::new(),
        })
    }

    fn save(&mut self, customers: &[Customer]) -> Result<()> {
        if self.fail_saves {
            return Err(CrmError::Io(std::io::Error::other(
                "simulated save failure",
            )));
        }
        self.records = customers.to_vec();
        Ok(())
    }
}
