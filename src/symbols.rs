use once_cell::sync::Lazy;
use serde::Deserialize;

/// Symbol-to-code lookup seam. One production implementation exists, backed
/// by the bundled table; tests may substitute their own.
pub trait SymbolLookup: Send + Sync {
    /// All currency codes whose table entry carries exactly this symbol,
    /// in table order. Empty when nothing matches.
    fn resolve(&self, symbol: &str) -> Vec<String>;
}

#[derive(Debug, Clone, Deserialize)]
struct SymbolEntry {
    symbol: String,
    code: String,
    #[allow(dead_code)]
    name: String,
}

static TABLE: Lazy<Vec<SymbolEntry>> = Lazy::new(|| {
    serde_json::from_str(include_str!("currencies.json"))
        .expect("bundled currencies.json is valid")
});

/// Lookup backed by the bundled `currencies.json` table.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable;

impl SymbolTable {
    pub fn new() -> Self {
        Self
    }
}

impl SymbolLookup for SymbolTable {
    fn resolve(&self, symbol: &str) -> Vec<String> {
        TABLE
            .iter()
            .filter(|entry| entry.symbol == symbol)
            .map(|entry| entry.code.clone())
            .collect()
    }
}
