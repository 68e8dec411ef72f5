mod prop_tests {
    use crate::fold::{FoldChars, data::FOLD_TABLE, folded_len};
    use crate::{AsciiFoldingFilter, PreTokenized, TokenStream, fold_to_ascii, needs_folding};
    use proptest::prelude::*;
    use std::borrow::Cow;

    fn table_keys() -> Vec<char> {
        let mut keys: Vec<char> = FOLD_TABLE.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    proptest! {
        #[test]
        fn ascii_is_identity(s in "[\\x00-\\x7F]{0,500}") {
            let folded = fold_to_ascii(&s);
            prop_assert!(matches!(folded, Cow::Borrowed(b) if b.as_ptr() == s.as_ptr()));
        }

        #[test]
        fn folding_is_idempotent(s in "\\PC{0,200}") {
            let once = fold_to_ascii(&s).into_owned();
            prop_assert!(!needs_folding(&once));
            let twice = fold_to_ascii(&once);
            prop_assert!(matches!(twice, Cow::Borrowed(_)));
            prop_assert_eq!(twice.as_ref(), once.as_str());
        }

        #[test]
        fn lazy_and_eager_agree(s in "\\PC{0,200}") {
            let lazy: String = FoldChars::new(&s).collect();
            let eager = fold_to_ascii(&s);
            prop_assert_eq!(folded_len(&s), eager.len());
            prop_assert_eq!(lazy, eager.into_owned());
        }

        #[test]
        fn folding_is_context_free(
            prefix in "\\PC{0,20}",
            c in prop::sample::select(table_keys()),
            suffix in "\\PC{0,20}",
        ) {
            let input = format!("{prefix}{c}{suffix}");
            let expected = format!(
                "{}{}{}",
                fold_to_ascii(&prefix),
                FOLD_TABLE.get(&c).unwrap(),
                fold_to_ascii(&suffix)
            );
            prop_assert_eq!(fold_to_ascii(&input).into_owned(), expected);
        }

        #[test]
        fn filter_emits_one_or_two_per_token(
            words in prop::collection::vec("[a-zA-Zéüßﬁ⑽中]{1,8}", 0..20),
            preserve in any::<bool>(),
        ) {
            let text = words.join(" ");
            let filter = AsciiFoldingFilter::with_preserve_original(
                PreTokenized::whitespace(&text),
                preserve,
            );
            let out: Vec<_> = filter.tokens().map(|t| t.unwrap()).collect();

            let mut i = 0;
            for word in &words {
                let folded = fold_to_ascii(word);
                prop_assert_eq!(&out[i].text, folded.as_ref());
                prop_assert_eq!(out[i].position_increment, 1);
                i += 1;
                if preserve && folded != word.as_str() {
                    prop_assert_eq!(&out[i].text, word);
                    prop_assert_eq!(out[i].position_increment, 0);
                    prop_assert_eq!(out[i].start_offset, out[i - 1].start_offset);
                    prop_assert_eq!(out[i].end_offset, out[i - 1].end_offset);
                    i += 1;
                }
            }
            prop_assert_eq!(i, out.len());
        }
    }
}
