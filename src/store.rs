//! In-memory record store.
//!
//! Ordered collection of customers (insertion order is display order) plus
//! the next-id counter. Ids are assigned monotonically and never reused,
//! even after deletions. The store performs no I/O; persistence is triggered
//! by the [`crate::api`] layer.

use crate::model::{Category, Customer};
use crate::validate;

/// Partial field changes for an update. `None` keeps the current value.
/// Category is always supplied and always overwrites: the update flow
/// re-collects it from the fixed menu every time, unlike the other fields.
#[derive(Debug, Clone, Default)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub category: Category,
}

/// Summary counts over the store. Records with a category outside the fixed
/// set are counted in `total` and surfaced in `unrecognized`, but excluded
/// from the three category buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub particulares: usize,
    pub empresas: usize,
    pub vips: usize,
    pub unrecognized: usize,
    /// Highest id issued so far; 0 when nothing was ever assigned.
    pub last_assigned_id: u32,
}

#[derive(Debug)]
pub struct CustomerStore {
    customers: Vec<Customer>,
    next_id: u32,
}

impl Default for CustomerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerStore {
    pub fn new() -> Self {
        Self {
            customers: Vec::new(),
            next_id: 1,
        }
    }

    /// Seeds the store from loaded records, in file order. The next-id
    /// counter starts at (max loaded id + 1), or 1 if nothing loaded.
    pub fn from_records(customers: Vec<Customer>) -> Self {
        let next_id = customers
            .iter()
            .map(|c| c.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        Self { customers, next_id }
    }

    /// Appends a new customer with the next id. Inputs are expected to be
    /// validated by the caller; the store does not re-validate on create.
    pub fn create(
        &mut self,
        name: String,
        email: String,
        phone: String,
        company: String,
        category: Category,
    ) -> &Customer {
        let customer = Customer::new(self.next_id, name, email, phone, company, category);
        self.next_id += 1;
        self.customers.push(customer);
        self.customers.last().expect("just pushed")
    }

    pub fn all(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Case-insensitive substring match against name or email, preserving
    /// store order. Blank-term rejection happens in the API layer.
    pub fn search(&self, term: &str) -> Vec<&Customer> {
        let term = term.trim().to_lowercase();
        self.customers
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&term) || c.email.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Applies partial changes to the customer with the given id. Invalid
    /// email or phone values are ignored, keeping the old value; category
    /// always overwrites. Returns `None` when the id is unknown.
    pub fn update(&mut self, id: u32, changes: CustomerUpdate) -> Option<&Customer> {
        let customer = self.customers.iter_mut().find(|c| c.id == id)?;

        if let Some(name) = changes.name.filter(|n| validate::valid_name(n)) {
            customer.name = name;
        }
        if let Some(email) = changes.email.filter(|e| validate::valid_email(e)) {
            customer.email = email;
        }
        if let Some(phone) = changes.phone.filter(|p| validate::valid_phone(p)) {
            customer.phone = phone;
        }
        if let Some(company) = changes.company {
            customer.company = Customer::company_or_default(company);
        }
        customer.category = changes.category;

        Some(customer)
    }

    /// Removes the customer with the given id, returning it. The id is never
    /// handed out again.
    pub fn delete(&mut self, id: u32) -> Option<Customer> {
        let pos = self.customers.iter().position(|c| c.id == id)?;
        Some(self.customers.remove(pos))
    }

    pub fn statistics(&self) -> Statistics {
        let mut stats = Statistics {
            total: self.customers.len(),
            particulares: 0,
            empresas: 0,
            vips: 0,
            unrecognized: 0,
            last_assigned_id: self.next_id - 1,
        };

        for customer in &self.customers {
            match customer.category {
                Category::Particular => stats.particulares += 1,
                Category::Empresa => stats.empresas += 1,
                Category::Vip => stats.vips += 1,
                Category::Other(_) => stats.unrecognized += 1,
            }
        }

        stats
    }
}
