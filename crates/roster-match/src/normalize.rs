//! Name normalization into comparison keys.
//!
//! Uploaded rosters and master rosters use inconsistent capitalization,
//! spacing, and punctuation ("Charan - G4 VLSI" vs "charan g4vlsi").
//! Normalization collapses that formatting noise while keeping enough
//! alphanumeric content to discriminate between distinct names.

/// Canonicalize a raw name into a comparison key.
///
/// Lower-cases the input, then keeps only ASCII letters and digits; all
/// whitespace and punctuation is dropped. Total over any string, including
/// the empty string, and idempotent.
#[must_use]
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_case_spacing_and_punctuation() {
        assert_eq!(normalize("Charan - G4 VLSI"), "charang4vlsi");
        assert_eq!(normalize("charan g4vlsi"), "charang4vlsi");
        assert_eq!(normalize("  John   Smith  "), "johnsmith");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(normalize("Batch 42"), "batch42");
    }

    #[test]
    fn empty_and_symbol_only_inputs_yield_empty_keys() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  \t "), "");
        assert_eq!(normalize("!!--??"), "");
    }

    #[test]
    fn drops_non_ascii_characters() {
        assert_eq!(normalize("José Núñez"), "josnez");
    }

    #[test]
    fn is_idempotent() {
        for raw in ["Charan - G4 VLSI", "", "a1 b2", "ÅSA"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }
}
