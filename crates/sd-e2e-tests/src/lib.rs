//! Test-only crate. The end-to-end suites live under `tests/`.
