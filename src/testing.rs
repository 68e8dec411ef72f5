//! Shared test support: the universal stage contract and a mock upstream
//! tokenizer for driving token filters.
pub mod mock_tokenizer;
pub mod stage_contract;
