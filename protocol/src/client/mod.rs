/// Lookups that can be sent to the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRequest {
    /// /pokemon/ID
    ById(u32),

    /// /pokemon/NAME
    ByName(String),
}

impl CatalogRequest {
    /// Build a name lookup from free text
    pub fn search(query: &str) -> Self {
        Self::ByName(normalize_query(query))
    }

    /// Resource path relative to the catalog base url
    pub fn to_path(&self) -> String {
        match self {
            Self::ById(id) => format!("pokemon/{}", id),
            Self::ByName(name) => format!("pokemon/{}", name),
        }
    }

    /// Full url: BASE/PATH
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.to_path())
    }
}

/// Catalog names are lowercase with words joined by '-' ("Mr. Mime" -> "mr.-mime").
///
/// Only `[a-z0-9.-]` survive, so the result is always a single path segment.
pub fn normalize_query(query: &str) -> String {
    query
        .split_whitespace()
        .map(|word| {
            word.to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .trim_matches(|c| c == '.' || c == '-')
        .to_string()
}
