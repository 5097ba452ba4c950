use super::{Backend, LoadReport};
use crate::codec;
use crate::error::Result;
use crate::model::Customer;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed relative path of the backing store.
pub const DATA_FILE: &str = "datos/clientes.csv";

/// File-backed persistence over a flat delimited text file.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Backend at the default `datos/clientes.csv` location.
    pub fn new() -> Self {
        Self::at(DATA_FILE)
    }

    /// Backend at an explicit path, used by tests.
    pub fn at<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl Default for FileBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for FileBackend {
    fn load(&self) -> Result<LoadReport> {
        if !self.path.exists() {
            return Ok(LoadReport::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut report = LoadReport::default();

        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match codec::decode(line) {
                Ok(customer) => report.customers.push(customer),
                Err(_) => report.skipped.push(line.to_string()),
            }
        }

        Ok(report)
    }

    fn save(&mut self, customers: &[Customer]) -> Result<()> {
        self.ensure_parent_dir()?;

        let mut content = String::new();
        for customer in customers {
            content.push_str(&codec::encode(customer));
            content.push('\n');
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use tempfile::TempDir;

    fn sample(id: u32, name: &str) -> Customer {
        Customer::new(
            id,
            name.into(),
            format!("{}@x.com", name.to_lowercase()),
            "600111222".into(),
            "-".into(),
            Category::Particular,
        )
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::at(dir.path().join("datos/clientes.csv"));

        let report = backend.load().unwrap();
        assert!(report.customers.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn save_creates_parent_dir_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("datos/clientes.csv");
        let mut backend = FileBackend::at(&path);

        let records = vec![sample(1, "Ana"), sample(2, "Bob")];
        backend.save(&records).unwrap();
        assert!(path.exists());

        let report = backend.load().unwrap();
        assert_eq!(report.customers, records);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let dir = TempDir::new().unwrap();
        let mut backend = FileBackend::at(dir.path().join("clientes.csv"));

        backend.save(&[sample(1, "Ana"), sample(2, "Bob")]).unwrap();
        backend.save(&[sample(2, "Bob")]).unwrap();

        let report = backend.load().unwrap();
        assert_eq!(report.customers.len(), 1);
        assert_eq!(report.customers[0].id, 2);
    }

    #[test]
    fn load_skips_blank_and_malformed_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clientes.csv");
        fs::write(
            &path,
            "1;Ana;ana@x.com;600111222;-;particular\n\
             \n\
             2;too;few;fields\n\
             bad-id;Bob;bob@x.com;611222333;-;vip\n\
             3;Eve;eve@x.com;622333444;Acme;empresa\n",
        )
        .unwrap();

        let report = FileBackend::at(&path).load().unwrap();
        let ids: Vec<u32> = report.customers.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(report.skipped.len(), 2);
        assert!(report.skipped[0].contains("too;few"));
    }
}
