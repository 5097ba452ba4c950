//! Line codec for the backing store.
//!
//! One record per line, six fields joined by `;`:
//! `id;name;email;phone;company;category`. Decode is a structural parser
//! only: field count and a numeric id are checked, business rules are not
//! (an email without `@` loads fine).

use crate::error::{CrmError, Result};
use crate::model::{Category, Customer};

pub const FIELD_DELIMITER: char = ';';
pub const FIELD_COUNT: usize = 6;

/// Serializes a customer to one line. Field values containing the delimiter
/// are rejected at the input boundary (see `validate::safe_field`), so no
/// escaping happens here.
pub fn encode(customer: &Customer) -> String {
    [
        customer.id.to_string(),
        customer.name.clone(),
        customer.email.clone(),
        customer.phone.clone(),
        customer.company.clone(),
        customer.category.to_string(),
    ]
    .join(&FIELD_DELIMITER.to_string())
}

/// Parses one line back into a customer. Surrounding whitespace is trimmed
/// from every field. A wrong field count or an unparseable id yields
/// `CrmError::MalformedLine` carrying the original line.
pub fn decode(line: &str) -> Result<Customer> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(CrmError::MalformedLine(line.to_string()));
    }

    let id: u32 = fields[0]
        .parse()
        .map_err(|_| CrmError::MalformedLine(line.to_string()))?;

    Ok(Customer {
        id,
        name: fields[1].to_string(),
        email: fields[2].to_string(),
        phone: fields[3].to_string(),
        company: fields[4].to_string(),
        category: Category::parse(fields[5]),
    })
}
