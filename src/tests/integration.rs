#[cfg(test)]
mod integration_tests {
    use crate::testing::mock_tokenizer::MockTokenizer;
    use crate::{
        AsciiFold, AsciiFoldingFilter, AsciiFoldingFilterFactory, PreTokenized, Stage, Token,
        TokenStream, fold_to_ascii,
    };
    use std::borrow::Cow;
    use std::collections::HashMap;

    const TEXT: &str = "Ærøskøbing “Straße” ﬁsh-market ⑽ clés 東京 END";

    fn texts<S: TokenStream>(stream: S) -> Vec<String> {
        stream.tokens().map(|t| t.unwrap().text).collect()
    }

    #[test]
    fn filter_agrees_with_whole_text_folding() {
        let expected: Vec<String> = fold_to_ascii(TEXT)
            .split_whitespace()
            .map(str::to_string)
            .collect();
        let folded = texts(AsciiFoldingFilter::new(MockTokenizer::whitespace(TEXT)));
        assert_eq!(folded, expected);
        assert_eq!(
            folded,
            vec!["AEroskobing", "\"Strasse\"", "fish-market", "(10)", "cles", "東京", "END"]
        );
    }

    #[test]
    fn stage_then_filter_is_stable() {
        // A host pipeline may fold the raw text before tokenizing as well.
        let prefolded = AsciiFold.apply(Cow::Borrowed(TEXT));
        let twice = texts(AsciiFoldingFilter::with_preserve_original(
            MockTokenizer::whitespace(&prefolded),
            true,
        ));
        let once = texts(AsciiFoldingFilter::new(MockTokenizer::whitespace(TEXT)));
        assert_eq!(twice, once);
    }

    #[test]
    fn chained_filters_are_idempotent() {
        let inner = AsciiFoldingFilter::new(MockTokenizer::whitespace(TEXT));
        let outer = AsciiFoldingFilter::with_preserve_original(inner, true);
        let once = texts(AsciiFoldingFilter::new(MockTokenizer::whitespace(TEXT)));
        assert_eq!(texts(outer), once);
    }

    #[test]
    fn factory_from_args_end_to_end() {
        let args = HashMap::from([("preserveOriginal".to_string(), "true".to_string())]);
        let factory = AsciiFoldingFilterFactory::from_args(args).unwrap();
        let tokens: Vec<Token> = factory
            .create(MockTokenizer::whitespace("Des mot clés"))
            .tokens()
            .map(Result::unwrap)
            .collect();
        let summary: Vec<_> = tokens
            .iter()
            .map(|t| (t.text.as_str(), t.position_increment, t.start_offset))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Des", 1, 0),
                ("mot", 1, 4),
                ("cles", 1, 8),
                ("clés", 0, 8)
            ]
        );
    }

    #[test]
    fn independent_filters_run_concurrently() {
        let docs = ["café crème", "Ærø ﬂow", "naïve ⑽", "plain text"];
        let results: Vec<Vec<String>> = std::thread::scope(|scope| {
            let handles: Vec<_> = docs
                .iter()
                .map(|doc| {
                    scope.spawn(move || {
                        texts(AsciiFoldingFilter::with_preserve_original(
                            PreTokenized::whitespace(doc),
                            true,
                        ))
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(
            results,
            vec![
                vec!["cafe", "café", "creme", "crème"],
                vec!["AEro", "Ærø", "flow", "ﬂow"],
                vec!["naive", "naïve", "(10)", "⑽"],
                vec!["plain", "text"],
            ]
        );
    }
}
