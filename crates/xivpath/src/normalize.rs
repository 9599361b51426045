//! Path normalization.

/// Case-fold a path and turn every backslash into a forward slash.
///
/// Folding goes through upper case first so that a path and its
/// upper-cased form always normalize alike (`ı` and `I` both become `i`).
/// No other transformation is applied.
pub fn normalize(path: &str) -> String {
    path.to_uppercase().to_lowercase().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize(r"Chara\Equipment\E0001\e0001.IMC"),
            "chara/equipment/e0001/e0001.imc"
        );
    }

    #[test]
    fn test_upper_case_form_normalizes_alike() {
        let path = "chara/equıpment/e0001/e0001.imc";
        assert_eq!(normalize(path), "chara/equipment/e0001/e0001.imc");
        assert_eq!(normalize(path), normalize(&path.to_uppercase()));
        assert_eq!(normalize("straße"), normalize("STRASSE"));
    }

    #[test]
    fn test_no_trimming() {
        assert_eq!(normalize("  UI/Icon/ "), "  ui/icon/ ");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("a%20b"), "a%20b");
    }
}
