//! State-level renewable-energy scheme reference table.

use std::collections::HashMap;

/// Returned verbatim for states without a table entry.
pub const SCHEME_FALLBACK: &str =
    "No specific scheme found. Check your state renewable energy portal.";

/// Mapping from lowercase state name to scheme description. Lookup is
/// case-insensitive only; extra whitespace or alternate spellings miss.
#[derive(Debug, Clone)]
pub struct SchemeTable {
    schemes: HashMap<String, String>,
}

impl SchemeTable {
    pub fn new(schemes: HashMap<String, String>) -> Self {
        Self { schemes }
    }

    /// The three built-in state schemes.
    pub fn builtin() -> Self {
        let schemes = [
            (
                "karnataka",
                "Surya Raitha Scheme - Solar pump subsidy for farmers.",
            ),
            (
                "tamil nadu",
                "Chief Minister's Solar Rooftop Capital Incentive Scheme.",
            ),
            (
                "maharashtra",
                "MahaUrja Subsidy for Rooftop Solar Installations.",
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self::new(schemes)
    }

    /// Case-folded lookup with the documented fallback on a miss.
    pub fn lookup(&self, state: &str) -> String {
        self.schemes
            .get(&state.to_lowercase())
            .cloned()
            .unwrap_or_else(|| SCHEME_FALLBACK.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let table = SchemeTable::builtin();
        assert_eq!(table.lookup("Karnataka"), table.lookup("karnataka"));
        assert!(table.lookup("KARNATAKA").contains("Surya Raitha"));
    }

    #[test]
    fn lookup_unknown_state_returns_fallback_verbatim() {
        let table = SchemeTable::builtin();
        assert_eq!(table.lookup("Kerala"), SCHEME_FALLBACK);
    }

    #[test]
    fn lookup_does_not_normalize_whitespace() {
        let table = SchemeTable::builtin();
        assert_eq!(table.lookup(" karnataka "), SCHEME_FALLBACK);
    }
}
