//! Whitespace tokenizer that polices the stream protocol.
//!
//! Panics when a consumer advances before `reset()` or keeps advancing past the
//! end of the stream, and can be told to fail at a given token to exercise
//! error propagation.
use crate::token::{Token, TokenStream, whitespace_tokens};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MockError {
    #[error("simulated read failure at token {0}")]
    Read(usize),
    #[error("simulated reset failure")]
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Protocol {
    Created,
    Streaming,
    Exhausted,
}

#[derive(Debug)]
pub struct MockTokenizer {
    tokens: Vec<Token>,
    cursor: usize,
    current: Token,
    protocol: Protocol,
    fail_at: Option<usize>,
    fail_reset: bool,
    pub resets: usize,
}

impl MockTokenizer {
    pub fn whitespace(text: &str) -> Self {
        Self {
            tokens: whitespace_tokens(text),
            cursor: 0,
            current: Token::default(),
            protocol: Protocol::Created,
            fail_at: None,
            fail_reset: false,
            resets: 0,
        }
    }

    /// Fail when asked for the token at `index` (0-based).
    pub fn failing_at(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }

    pub fn failing_reset(mut self) -> Self {
        self.fail_reset = true;
        self
    }

    /// Give every token the given type and keyword flag.
    pub fn with_attributes(mut self, token_type: &'static str, keyword: bool) -> Self {
        for token in &mut self.tokens {
            token.token_type = token_type;
            token.keyword = keyword;
        }
        self
    }
}

impl TokenStream for MockTokenizer {
    type Error = MockError;

    fn reset(&mut self) -> Result<(), MockError> {
        if self.fail_reset {
            return Err(MockError::Reset);
        }
        self.cursor = 0;
        self.current = Token::default();
        self.protocol = Protocol::Streaming;
        self.resets += 1;
        Ok(())
    }

    fn advance(&mut self) -> Result<bool, MockError> {
        match self.protocol {
            Protocol::Created => panic!("advance() called before reset()"),
            Protocol::Exhausted => panic!("advance() called after end of stream"),
            Protocol::Streaming => {}
        }
        if self.fail_at == Some(self.cursor) {
            return Err(MockError::Read(self.cursor));
        }
        let Some(next) = self.tokens.get(self.cursor) else {
            self.protocol = Protocol::Exhausted;
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
