//! Form, color, and request-coordination state for the ascii-art studio.
//!
//! This crate owns every decision the studio client makes that does not need a
//! browser: what the form and the three color channels currently hold, whether
//! a change event may schedule a render, whether an export attempt may proceed,
//! what the outgoing request bodies look like, and how a service response folds
//! back into the preview. The host layer (Leptos components, native CLI) wires
//! events and transport around these types but adds no rules of its own, so
//! every invariant here is testable with plain `cargo test`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`form`] | Banner text form state: text, banner style, alignment, targets |
//! | [`channel`] | Color channels, preset tables, and radio mirroring rules |
//! | [`schedule`] | Debounce ticketing and the one-shot post-clear suppression |
//! | [`guard`] | Export single-flight guard with a wall-clock cool-down |
//! | [`request`] | Render/export request building and form-body encoding |
//! | [`preview`] | Preview reducer: applies render outcomes, extracts plain text |
//! | [`consts`] | Shared timing, limit, and default-color constants |

pub mod channel;
pub mod consts;
pub mod form;
pub mod guard;
pub mod preview;
pub mod request;
pub mod schedule;
