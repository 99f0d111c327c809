//! Unit tests for the board domain, registries and store.
