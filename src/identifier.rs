//! Identifier normalization for tax-ID-shaped numeric documents.
//!
//! Brazilian documents (CNPJ, CPF) are commonly written with punctuation,
//! e.g. `11.222.333/0001-81`. Every handler that expects a numeric document
//! normalizes through here; free-text name searches do not.

/// Strip every character that is not an ASCII digit, preserving digit order.
///
/// Pure and total: empty input yields an empty string.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_cnpj_punctuation() {
        assert_eq!(normalize("11.222.333/0001-81"), "11222333000181");
    }

    #[test]
    fn strips_cpf_punctuation() {
        assert_eq!(normalize("123.456.789-09"), "12345678909");
    }

    #[test]
    fn preserves_digit_order() {
        assert_eq!(normalize("a1b2c3"), "123");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn non_ascii_digits_are_dropped() {
        // Only ASCII digits survive; Unicode digits and letters do not.
        assert_eq!(normalize("١٢٣٤5"), "5");
        assert_eq!(normalize("João da Silva"), "");
    }

    #[test]
    fn idempotent() {
        let inputs = ["11.222.333/0001-81", "", "abc", "000"];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }
}
