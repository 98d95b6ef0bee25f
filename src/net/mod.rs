//! Networking modules for the rendering service's HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` posts the form-encoded render and export requests built by the
//! `controls` crate and maps replies into its outcome types.

pub mod api;
