//! Scanner tests.

mod scanner;
