//! Shared timing, limit, and default-color constants for the studio controls.

// ── Timing ──────────────────────────────────────────────────────

/// Quiet period after the last form change before a render fires, in ms.
pub const DEBOUNCE_MS: u32 = 500;

/// Wall-clock window during which a second export click is dropped, in ms.
pub const EXPORT_COOLDOWN_MS: u32 = 1000;

// ── Limits ──────────────────────────────────────────────────────

/// Character count at which the counter flips to its over-limit style.
/// Display-only; the request is sent regardless.
pub const TEXT_SOFT_LIMIT: usize = 1_000_000;

// ── Channel defaults ────────────────────────────────────────────

/// Default hex for the global text color channel.
pub const DEFAULT_GLOBAL_COLOR: &str = "#ff0000";

/// Default hex for the per-target override channel.
pub const DEFAULT_TARGET_COLOR: &str = "#00ffff";

/// Default hex for the preview background channel.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#f8f9f9";

// ── Export defaults ─────────────────────────────────────────────

/// Filename base used when the filename input is blank.
pub const DEFAULT_EXPORT_BASENAME: &str = "asciiboard-export";

/// Export format preselected in the options panel.
pub const DEFAULT_EXPORT_FORMAT: &str = "txt";

// ── User-facing texts ───────────────────────────────────────────

/// Shown when the render service rejects a request with an empty body.
pub const GENERIC_RENDER_ERROR: &str = "Something went wrong.";

/// Shown when export is clicked while the rendered preview is empty.
pub const EMPTY_EXPORT_NOTICE: &str = "Nothing to export.";
