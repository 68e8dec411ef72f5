//! Token model and the pull-based token stream protocol.
//!
//! A [`TokenStream`] owns one current [`Token`]. `advance()` moves to the next
//! token and reports whether there was one; [`token`](TokenStream::token) and
//! [`token_mut`](TokenStream::token_mut) expose the current token's attributes.
//! Filters wrap an upstream stream and rewrite its current token in place, so
//! a whole chain shares a single token and nothing is copied per hop.
//!
//! Protocol: `reset()` → `advance()` until it returns `false` → drop (or
//! `reset()` again for a new stream).
use std::convert::Infallible;

/// Token type assigned when the producer does not classify tokens.
pub const DEFAULT_TOKEN_TYPE: &str = "word";

/// One unit of text plus its positional metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Distance from the previous token's position. `0` stacks this token on
    /// the same position as the previous one.
    pub position_increment: u32,
    /// Byte offset of the token's first byte in the source text.
    pub start_offset: usize,
    /// Byte offset one past the token's last byte in the source text.
    pub end_offset: usize,
    pub token_type: &'static str,
    /// Marks tokens that later stages (e.g. stemmers) must leave alone.
    pub keyword: bool,
}

impl Default for Token {
    fn default() -> Self {
        Self {
            text: String::new(),
            position_increment: 1,
            start_offset: 0,
            end_offset: 0,
            token_type: DEFAULT_TOKEN_TYPE,
            keyword: false,
        }
    }
}

impl Token {
    pub fn new(text: impl Into<String>, start_offset: usize, end_offset: usize) -> Self {
        Self {
            text: text.into(),
            start_offset,
            end_offset,
            ..Self::default()
        }
    }

    pub fn with_position_increment(mut self, position_increment: u32) -> Self {
        self.position_increment = position_increment;
        self
    }

    pub fn with_type(mut self, token_type: &'static str) -> Self {
        self.token_type = token_type;
        self
    }

    pub fn with_keyword(mut self, keyword: bool) -> Self {
        self.keyword = keyword;
        self
    }
}

/// Pull-based source of tokens.
pub trait TokenStream {
    /// Failure raised by the producer (e.g. I/O while reading source text).
    /// Filters forward it unchanged.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Prepare for a new stream. Must be called before the first `advance()`.
    fn reset(&mut self) -> Result<(), Self::Error>;

    /// Move to the next token. `Ok(false)` signals end of stream; calling
    /// `advance()` again afterwards without a `reset()` is a contract violation.
    fn advance(&mut self) -> Result<bool, Self::Error>;

    /// Current token. Only meaningful after `advance()` returned `Ok(true)`.
    fn token(&self) -> &Token;

    fn token_mut(&mut self) -> &mut Token;

    /// Owned-token iterator over this stream. Resets the stream on the first pull.
    fn tokens(self) -> Tokens<Self>
    where
        Self: Sized,
    {
        Tokens::new(self)
    }
}

/// Iterator adapter over a [`TokenStream`], yielding a clone of every token.
///
/// Fused: after end of stream or the first error it only yields `None`.
#[derive(Debug)]
pub struct Tokens<S> {
    stream: S,
    started: bool,
    done: bool,
}

impl<S: TokenStream> Tokens<S> {
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            started: false,
            done: false,
        }
    }

    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: TokenStream> Iterator for Tokens<S> {
    type Item = Result<Token, S::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            if let Err(e) = self.stream.reset() {
                self.done = true;
                return Some(Err(e));
            }
        }
        match self.stream.advance() {
            Ok(true) => Some(Ok(self.stream.token().clone())),
            Ok(false) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<S: TokenStream> std::iter::FusedIterator for Tokens<S> {}

/// Split `text` on Unicode whitespace, recording byte offsets.
pub fn whitespace_tokens(text: &str) -> Vec<Token> {
    let base = text.as_ptr() as usize;
    text.split_whitespace()
        .map(|word| {
            let start = word.as_ptr() as usize - base;
            Token::new(word, start, start + word.len())
        })
        .collect()
}

/// Infallible token source over tokens that were segmented elsewhere.
#[derive(Debug, Clone, Default)]
pub struct PreTokenized {
    tokens: Vec<Token>,
    cursor: usize,
    current: Token,
}

impl PreTokenized {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            cursor: 0,
            current: Token::default(),
        }
    }

    /// Source over the whitespace-separated words of `text`.
    pub fn whitespace(text: &str) -> Self {
        Self::new(whitespace_tokens(text))
    }
}

impl TokenStream for PreTokenized {
    type Error = Infallible;

    fn reset(&mut self) -> Result<(), Infallible> {
        self.cursor = 0;
        self.current = Token::default();
        Ok(())
    }

    fn advance(&mut self) -> Result<bool, Infallible> {
        let Some(next) = self.tokens.get(self.cursor) else {
            return Ok(false);
        };
        self.current.clone_from(next);
        self.cursor += 1;
        Ok(true)
    }

    fn token(&self) -> &Token {
        &self.current
    }

    fn token_mut(&mut self) -> &mut Token {
        &mut self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokens_offsets() {
        let tokens = whitespace_tokens("  Des mot\tclés ");
        let spans: Vec<_> = tokens
            .iter()
            .map(|t| (t.text.as_str(), t.start_offset, t.end_offset))
            .collect();
        assert_eq!(spans, vec![("Des", 2, 5), ("mot", 6, 9), ("clés", 10, 15)]);
    }

    #[test]
    fn test_whitespace_tokens_empty() {
        assert!(whitespace_tokens("").is_empty());
        assert!(whitespace_tokens(" \n\t ").is_empty());
    }

    #[test]
    fn test_pre_tokenized_protocol() {
        let mut stream = PreTokenized::whitespace("a b");
        stream.reset().unwrap();
        assert!(stream.advance().unwrap());
        assert_eq!(stream.token().text, "a");
        assert!(stream.advance().unwrap());
        assert_eq!(stream.token().text, "b");
        assert!(!stream.advance().unwrap());

        stream.reset().unwrap();
        assert!(stream.advance().unwrap());
        assert_eq!(stream.token().text, "a");
    }

    #[test]
    fn test_token_builders() {
        let token = Token::new("x", 3, 4)
            .with_position_increment(0)
            .with_type("<ALPHANUM>")
            .with_keyword(true);
        assert_eq!(token.position_increment, 0);
        assert_eq!(token.token_type, "<ALPHANUM>");
        assert!(token.keyword);
        assert_eq!(Token::new("y", 0, 1).position_increment, 1);
    }

    #[test]
    fn test_tokens_iterator_resets_and_fuses() {
        let mut iter = PreTokenized::whitespace("one two").tokens();
        let texts: Vec<_> = iter.by_ref().map(|t| t.unwrap().text).collect();
        assert_eq!(texts, vec!["one", "two"]);
        assert!(iter.next().is_none());
    }
}
