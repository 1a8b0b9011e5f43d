/// Presentation-only pass/fail categorization of a backend status string.
///
/// A status passes iff it starts with `v` after lower-casing ("Válido",
/// "valido", "v"). This is the single source of truth for pass/fail marking
/// anywhere results are rendered.
pub fn is_passing(status: &str) -> bool {
    status.to_lowercase().starts_with('v')
}

#[cfg(test)]
mod tests {
    use super::is_passing;

    #[test]
    fn passes_iff_lowercased_status_starts_with_v() {
        assert!(is_passing("Válido"));
        assert!(is_passing("Valido"));
        assert!(is_passing("v"));
        assert!(is_passing("VALIDADO"));
        assert!(!is_passing(""));
        assert!(!is_passing("X1"));
        assert!(!is_passing("Inválido"));
        assert!(!is_passing(" valido"));
    }
}
