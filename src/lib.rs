pub mod factory;
pub mod filter;
pub mod fold;
pub mod stage;
pub mod token;

#[cfg(test)]
pub(crate) mod testing;

pub use factory::{AsciiFoldingFilterFactory, ConfigError};
pub use filter::AsciiFoldingFilter;
pub use fold::{FoldChars, fold_char, fold_into, fold_to_ascii, needs_folding};
pub use stage::{AsciiFold, Stage};
pub use token::{PreTokenized, Token, TokenStream, Tokens};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
    include!("tests/foldings.rs");
}
