//! Main-language ranking.

use serde::{Deserialize, Serialize};

use crate::types::LanguageUsage;

/// How many languages are reported as "main".
pub const MAIN_LANGUAGE_LIMIT: usize = 3;

/// A language and its usage count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedLanguage {
    pub name: String,
    pub count: u64,
}

/// Top languages by usage, descending. Ties keep their encounter order.
pub fn main_languages(languages: &LanguageUsage) -> Vec<RankedLanguage> {
    let mut ranked: Vec<RankedLanguage> = languages
        .iter()
        .map(|(name, &count)| RankedLanguage {
            name: name.clone(),
            count,
        })
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(MAIN_LANGUAGE_LIMIT);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(ranked: &[RankedLanguage]) -> Vec<&str> {
        ranked.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_top_three_descending() {
        let langs: LanguageUsage = [("C", 1), ("Rust", 9), ("Go", 4), ("Python", 6)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(names(&main_languages(&langs)), vec!["Rust", "Python", "Go"]);
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let langs: LanguageUsage = [("Zig", 2), ("Ada", 2), ("Go", 5), ("Nim", 2)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(names(&main_languages(&langs)), vec!["Go", "Zig", "Ada"]);
    }

    #[test]
    fn test_fewer_than_three() {
        let langs: LanguageUsage = [("Rust".to_string(), 1)].into_iter().collect();
        let ranked = main_languages(&langs);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].count, 1);
        assert!(main_languages(&LanguageUsage::new()).is_empty());
    }
}
