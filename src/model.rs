/// Sentinel stored in the company field when the customer has none.
pub const NO_COMPANY: &str = "-";

/// Customer category. `Other` carries category strings loaded from disk that
/// are outside the fixed set; decode is structural only and must not reject
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Particular,
    Empresa,
    Vip,
    Other(String),
}

impl Category {
    /// Case-insensitive parse. Never fails: unrecognized input is preserved
    /// as `Other`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "particular" => Category::Particular,
            "empresa" => Category::Empresa,
            "vip" => Category::Vip,
            _ => Category::Other(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Particular => "particular",
            Category::Empresa => "empresa",
            Category::Vip => "vip",
            Category::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Particular
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub category: Category,
}

impl Customer {
    pub fn new(
        id: u32,
        name: String,
        email: String,
        phone: String,
        company: String,
        category: Category,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            company: Self::company_or_default(company),
            category,
        }
    }

    /// Normalizes a blank company to the `"-"` sentinel.
    pub fn company_or_default(company: String) -> String {
        if company.trim().is_empty() {
            NO_COMPANY.to_string()
        } else {
            company
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_categories_case_insensitively() {
        assert_eq!(Category::parse("VIP"), Category::Vip);
        assert_eq!(Category::parse("  Empresa "), Category::Empresa);
        assert_eq!(Category::parse("particular"), Category::Particular);
    }

    #[test]
    fn preserves_unrecognized_category() {
        let cat = Category::parse("premium");
        assert_eq!(cat, Category::Other("premium".to_string()));
        assert!(!cat.is_known());
        assert_eq!(cat.as_str(), "premium");
    }

    #[test]
    fn blank_company_becomes_sentinel() {
        assert_eq!(Customer::company_or_default("  ".into()), NO_COMPANY);
        assert_eq!(Customer::company_or_default("Acme".into()), "Acme");
    }
}
