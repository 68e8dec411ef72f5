//! stage/ascii_fold.rs – **Latin → ASCII folding (lossy)**
//! * `café` → `cafe`, `Straße` → `Strasse`, `ﬁsh` → `fish`
//! * Circled / fullwidth / sub- and superscript forms → plain ASCII
//! * Smart quotes, dashes, fullwidth brackets → ASCII punctuation
//! * Zero-copy when the text contains nothing foldable
use crate::{
    fold::{fold_into, folded_len, needs_folding},
    stage::Stage,
};
use std::borrow::Cow;

/// Public stage – zero-sized, stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiFold;

impl Stage for AsciiFold {
    fn name(&self) -> &'static str {
        "ascii_fold"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        needs_folding(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !needs_folding(&text) {
            return text;
        }
        let mut out = String::with_capacity(folded_len(&text));
        fold_into(&text, &mut out);
        Cow::Owned(out)
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for AsciiFold {
    fn samples() -> &'static [&'static str] {
        &[
            "Hello World 123",
            " déjà-vu ",
            "TEST",
            "",
            "Weißstraße",
            "ﬁsh ﬂow ﬃ",
            "①②③ ⑽ ⒈",
            "“quoted” — ‘text’",
            "ＦＵＬＬ ｗｉｄｔｈ",
            "日本語 café",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("café", "cafe"),
            ("clés", "cles"),
            ("CHAÎNE", "CHAINE"),
            ("Straße", "Strasse"),
            ("ẞ", "SS"),
            ("ﬁsh", "fish"),
            ("Ĳssel", "IJssel"),
            ("ǅemal", "Dzemal"),
            ("⑽", "(10)"),
            ("⒈", "1."),
            ("x²", "x2"),
            ("Ｈｅｌｌｏ", "Hello"),
            ("“Hi”", "\"Hi\""),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(AsciiFold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_apply_false_for_ascii() {
        assert!(!AsciiFold.needs_apply("hello world"));
        assert!(!AsciiFold.needs_apply(""));
    }

    #[test]
    fn test_needs_apply_false_for_unmapped_scripts() {
        assert!(!AsciiFold.needs_apply("русский 中文"));
    }

    #[test]
    fn test_needs_apply_detects_accents() {
        assert!(AsciiFold.needs_apply("naïve"));
        assert!(AsciiFold.needs_apply("русский é"));
    }

    #[test]
    fn test_apply_latin1() {
        let result = AsciiFold.apply(Cow::Borrowed("Des mot clés À LA CHAÎNE"));
        assert_eq!(result, "Des mot cles A LA CHAINE");
    }

    #[test]
    fn test_apply_keeps_unmapped_characters_in_place() {
        let result = AsciiFold.apply(Cow::Borrowed("über 中 æther"));
        assert_eq!(result, "uber 中 aether");
    }

    #[test]
    fn test_apply_zero_copy() {
        let input = "Paris France";
        let result = AsciiFold.apply(Cow::Borrowed(input));
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn test_apply_owned_input_unchanged_stays_owned() {
        let input = String::from("plain");
        let ptr = input.as_ptr();
        let result = AsciiFold.apply(Cow::Owned(input));
        assert!(matches!(result, Cow::Owned(ref s) if s.as_ptr() == ptr));
    }
}
