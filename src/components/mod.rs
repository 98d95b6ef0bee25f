//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the studio's input and output surfaces while
//! reading/writing shared state from Leptos context providers. None of
//! them owns a timer; anything time-driven goes through the studio
//! command channel.

pub mod banner_select;
pub mod color_group;
pub mod editor_form;
pub mod export_panel;
pub mod preview_pane;
