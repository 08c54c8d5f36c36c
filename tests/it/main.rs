//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - unit: Single-component tests (detection, linking, engine, options, cursor)
//! - integration: Full-gesture workflow tests through the recognizer

mod integration;
