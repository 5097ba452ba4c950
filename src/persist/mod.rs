//! # Persistence Layer
//!
//! Storage is abstracted behind the [`Backend`] trait to enable testing with
//! [`memory::MemoryBackend`] (no filesystem needed) and to keep the store
//! logic decoupled from where records live.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production backend over the flat text file
//!   `datos/clientes.csv`, one `;`-delimited record per line.
//! - [`memory::MemoryBackend`]: in-memory backend for tests, seedable and
//!   able to simulate save failures.
//!
//! Saves always rewrite the full snapshot; there is no incremental append.

use crate::error::Result;
use crate::model::Customer;

pub mod fs;
pub mod memory;

/// Outcome of a load: the records accepted in file order, plus the raw lines
/// that were skipped as malformed.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub customers: Vec<Customer>,
    pub skipped: Vec<String>,
}

/// Abstract interface for record persistence.
pub trait Backend {
    /// Read the full record set. A missing backing store is not an error:
    /// the report is simply empty.
    fn load(&self) -> Result<LoadReport>;

    /// Overwrite the backing store with the full record set.
    fn save(&mut self, customers: &[Customer]) -> Result<()>;
}
