//! Property-based tests for the ladder expansions.
