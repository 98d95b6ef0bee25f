//! Page modules for screen-level composition.
//!
//! ARCHITECTURE
//! ============
//! The app is a single screen: `studio` owns orchestration (the worker
//! loop, clear and export wiring) and delegates rendering details to
//! `components`.

pub mod studio;
