//! Markdown rendering tests.

mod export;
mod structure;
