#[cfg(test)]
mod unit_tests {
    use crate::testing::mock_tokenizer::MockTokenizer;
    use crate::{AsciiFoldingFilter, TokenStream};

    /// Pull one input token's worth of output and check it: the folded text,
    /// then (preserve mode, text changed) the original.
    fn assert_next_terms<S: TokenStream>(
        filter: &mut AsciiFoldingFilter<S>,
        unfolded: &str,
        folded: &str,
    ) {
        assert!(filter.advance().unwrap(), "stream ended before `{unfolded}`");
        assert_eq!(filter.token().text, folded);
        if filter.preserve_original() && unfolded != folded {
            assert!(filter.advance().unwrap());
            assert_eq!(filter.token().text, unfolded);
            assert_eq!(filter.token().position_increment, 0);
        }
    }

    const LATIN1: &str = "Des mot clés À LA CHAÎNE À Á Â Ã Ä Å Æ Ç È É Ê Ë Ì Í Î Ï Ĳ Ð Ñ Ò Ó Ô \
                          Õ Ö Ø Œ Þ Ù Ú Û Ü Ý Ÿ à á â ã ä å æ ç è é ê ë ì í î ï ĳ ð ñ ò ó ô õ ö \
                          ø œ ß þ ù ú û ü ý ÿ ﬁ ﬂ";

    const LATIN1_FOLDED: &str = "Des mot cles A LA CHAINE A A A A A A AE C E E E E I I I I IJ D N \
                                 O O O O O O OE TH U U U U Y Y a a a a a a ae c e e e e i i i i ij \
                                 d n o o o o o o oe ss th u u u u y y fi fl";

    #[test]
    fn latin1_accents() {
        for preserve in [false, true] {
            let mut filter = AsciiFoldingFilter::with_preserve_original(
                MockTokenizer::whitespace(LATIN1),
                preserve,
            );
            filter.reset().unwrap();
            for (unfolded, folded) in LATIN1.split(' ').zip(LATIN1_FOLDED.split(' ')) {
                assert_next_terms(&mut filter, unfolded, folded);
            }
            assert!(!filter.advance().unwrap());
        }
    }

    #[test]
    fn unmodified_letters_not_duplicated() {
        let mut filter =
            AsciiFoldingFilter::with_preserve_original(MockTokenizer::whitespace("§ ¦ ¤ END"), true);
        filter.reset().unwrap();
        for term in ["§", "¦", "¤", "END"] {
            assert_next_terms(&mut filter, term, term);
        }
        assert!(!filter.advance().unwrap());
    }

    #[test]
    fn mixed_stream_preserve_counts() {
        let input = "résumé plain naïve ASCII";
        let filter =
            AsciiFoldingFilter::with_preserve_original(MockTokenizer::whitespace(input), true);
        let texts: Vec<String> = filter.tokens().map(|t| t.unwrap().text).collect();
        assert_eq!(
            texts,
            vec!["resume", "résumé", "plain", "naive", "naïve", "ASCII"]
        );
    }
}
