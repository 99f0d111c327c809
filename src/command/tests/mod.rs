//! Unit tests for parsing, dispatch and the command loop.

mod processor_tests;
