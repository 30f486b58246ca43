//! Compile tests for the fieldwalk derives. The cases live in `tests/ui`.
