//! Text canonicalisation shared by catalog skills and candidate input.

/// Lowercases, folds `;` separators into spaces and collapses whitespace runs.
///
/// Absent input normalises to the empty string. Idempotent.
pub fn normalize_skills(text: Option<&str>) -> String {
    match text {
        Some(text) => text
            .to_lowercase()
            .replace(';', " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" "),
        None => String::new(),
    }
}

/// Canonical form of a short preference field (sector, city, education).
/// Blank values count as absent.
pub fn normalize_field(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_folds_separators() {
        assert_eq!(
            normalize_skills(Some("  Python;SQL;  Data   Analysis ")),
            "python sql data analysis"
        );
    }

    #[test]
    fn test_tabs_and_newlines_collapse() {
        assert_eq!(normalize_skills(Some("Excel\t\nTableau")), "excel tableau");
    }

    #[test]
    fn test_absent_is_empty() {
        assert_eq!(normalize_skills(None), "");
        assert_eq!(normalize_skills(Some(" ; ; ")), "");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["Machine Learning; Python", "  a;;b  c ", "", "ÉTUDES; Données"] {
            let once = normalize_skills(Some(raw));
            assert_eq!(normalize_skills(Some(&once)), once);
        }
    }

    #[test]
    fn test_field_blank_is_absent() {
        assert_eq!(normalize_field(Some("   ")), None);
        assert_eq!(normalize_field(None), None);
        assert_eq!(normalize_field(Some(" Mumbai ")), Some("mumbai".to_string()));
    }
}
