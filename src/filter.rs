//! Streaming ASCII folding token filter.
//!
//! [`AsciiFoldingFilter`] wraps an upstream [`TokenStream`] and folds the text
//! of every token it pulls (see [`crate::fold`]). Only the text changes; the
//! position increment, offsets, type and keyword flag are passed through.
//!
//! With `preserve_original` enabled, a token whose text changed is followed by
//! a copy of the unfolded token stacked on the same position
//! (`position_increment == 0`, identical offsets). Tokens that fold to
//! themselves are emitted once, never duplicated.
//!
//! ```
//! use asciifold::{AsciiFoldingFilter, PreTokenized, TokenStream};
//!
//! let filter = AsciiFoldingFilter::with_preserve_original(PreTokenized::whitespace("café END"), true);
//! let texts: Vec<String> = filter.tokens().map(|t| t.unwrap().text).collect();
//! assert_eq!(texts, ["cafe", "café", "END"]);
//! ```
use crate::{
    fold::fold_into,
    token::{Token, TokenStream},
};
use tracing::{trace, warn};

/// Per-stream emission state.
#[derive(Debug)]
enum State {
    /// Constructed, `reset()` not called yet.
    Unreset,
    /// Next `advance()` pulls from upstream.
    Idle,
    /// The folded token was emitted; its unfolded original goes out next.
    PendingOriginal(Token),
    /// Upstream reported end of stream.
    Exhausted,
}

#[derive(Debug)]
pub struct AsciiFoldingFilter<S> {
    input: S,
    preserve_original: bool,
    state: State,
    scratch: String,
}

impl<S: TokenStream> AsciiFoldingFilter<S> {
    pub fn new(input: S) -> Self {
        Self::with_preserve_original(input, false)
    }

    pub fn with_preserve_original(input: S, preserve_original: bool) -> Self {
        Self {
            input,
            preserve_original,
            state: State::Unreset,
            scratch: String::new(),
        }
    }

    #[inline]
    pub fn preserve_original(&self) -> bool {
        self.preserve_original
    }

    /// `true` between emitting a folded token and emitting its original.
    #[inline]
    pub fn has_pending_original(&self) -> bool {
        matches!(self.state, State::PendingOriginal(_))
    }

    pub fn into_inner(self) -> S {
        self.input
    }

    /// Fold the current upstream token in place.
    ///
    /// Returns the unfolded token when it has to be re-emitted.
    fn fold_current(&mut self) -> Option<Token> {
        let token = self.input.token_mut();
        if token.text.is_ascii() {
            return None;
        }

        self.scratch.clear();
        // A folded char is at most twice as wide as its UTF-8 encoding.
        self.scratch.reserve(token.text.len() * 2);
        if !fold_into(&token.text, &mut self.scratch) {
            return None;
        }

        let original = self.preserve_original.then(|| token.clone());
        token.text.clear();
        token.text.push_str(&self.scratch);
        original
    }

    /// Release-build handling of `advance()` outside a stream: log, keep the
    /// state and report end of stream without touching upstream.
    fn refuse_advance(&mut self, state: State) -> bool {
        match state {
            State::Unreset => {
                warn!("advance() called on an ascii folding filter that was never reset")
            }
            _ => warn!("advance() called on an exhausted ascii folding filter"),
        }
        self.state = state;
        false
    }
}

impl<S: TokenStream> TokenStream for AsciiFoldingFilter<S> {
    type Error = S::Error;

    fn reset(&mut self) -> Result<(), S::Error> {
        self.state = State::Unreset;
        self.scratch.clear();
        self.input.reset()?;
        self.state = State::Idle;
        trace!(
            preserve_original = self.preserve_original,
            "ascii folding filter reset"
        );
        Ok(())
    }

    fn advance(&mut self) -> Result<bool, S::Error> {
        debug_assert!(
            !matches!(self.state, State::Unreset),
            "advance() called before reset()"
        );
        debug_assert!(
            !matches!(self.state, State::Exhausted),
            "advance() called after end of stream"
        );
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => {}
            State::PendingOriginal(mut original) => {
                original.position_increment = 0;
                *self.input.token_mut() = original;
                return Ok(true);
            }
            state @ (State::Unreset | State::Exhausted) => return Ok(self.refuse_advance(state)),
        }

        if !self.input.advance()? {
            self.state = State::Exhausted;
            trace!("ascii folding filter reached end of stream");
            return Ok(false);
        }

        if let Some(original) = self.fold_current() {
            self.state = State::PendingOriginal(original);
        }
        Ok(true)
    }

    #[inline]
    fn token(&self) -> &Token {
        self.input.token()
    }

    #[inline]
    fn token_mut(&mut self) -> &mut Token {
        self.input.token_mut()
    }
}
