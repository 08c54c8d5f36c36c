//! Multi-component workflow tests driven through the recognizer.
