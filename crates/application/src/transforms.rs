//! Locale-specific text transforms
//!
//! Applied to raw query text before it reaches matching or substitution.

/// Transliterates Esperanto x-digraphs to their diacritic letters.
///
/// Each of `c g h j s u` (either case) directly followed by `x` or `X`
/// becomes the corresponding circumflexed/breve letter; the case of the
/// base letter carries over. Any other `x` is left untouched, so the
/// transform is idempotent.
#[must_use]
pub fn transform_eo_cx(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let transliterated = match c {
            'c' => Some('ĉ'),
            'C' => Some('Ĉ'),
            'g' => Some('ĝ'),
            'G' => Some('Ĝ'),
            'h' => Some('ĥ'),
            'H' => Some('Ĥ'),
            'j' => Some('ĵ'),
            'J' => Some('Ĵ'),
            's' => Some('ŝ'),
            'S' => Some('Ŝ'),
            'u' => Some('ŭ'),
            'U' => Some('Ŭ'),
            _ => None,
        };
        match transliterated {
            Some(letter) if matches!(chars.peek(), Some('x' | 'X')) => {
                chars.next();
                out.push(letter);
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lowercase_digraphs() {
        assert_eq!(transform_eo_cx("ehxosxangxo cxiujxauxde"), "eĥoŝanĝo ĉiuĵaŭde");
    }

    #[test]
    fn uppercase_digraphs() {
        assert_eq!(transform_eo_cx("EHXOSXANGXO CXIUJXAUXDE"), "EĤOŜANĜO ĈIUĴAŬDE");
    }

    #[test]
    fn mixed_case_follows_the_base_letter() {
        assert_eq!(transform_eo_cx("EHxOSxANGxO CxIUJxAUxDE"), "EĤOŜANĜO ĈIUĴAŬDE");
        assert_eq!(transform_eo_cx("hX"), "ĥ");
        assert_eq!(transform_eo_cx("Hx"), "Ĥ");
    }

    #[test]
    fn unrelated_x_is_untouched() {
        assert_eq!(transform_eo_cx("xylophone"), "xylophone");
        assert_eq!(transform_eo_cx("extra"), "extra");
        assert_eq!(transform_eo_cx("box"), "box");
    }

    #[test]
    fn idempotent() {
        let once = transform_eo_cx("ehxosxangxo cxiujxauxde");
        assert_eq!(transform_eo_cx(&once), once);

        let plain = transform_eo_cx("plain text");
        assert_eq!(transform_eo_cx(&plain), plain);
    }
}
