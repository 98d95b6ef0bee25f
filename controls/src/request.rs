//! Render and export request building.
//!
//! Requests are transient snapshots: built fresh from the current form and
//! color state at the moment of firing, never mutated afterwards. Field names
//! and pairing rules mirror the rendering service's form contract, and both
//! bodies encode as `application/x-www-form-urlencoded` so the web client and
//! the CLI share one encoding path.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use crate::channel::{ChannelKind, ColorBoard};
use crate::consts::DEFAULT_EXPORT_BASENAME;
use crate::form::{Alignment, FormState};

/// Content type of both outbound request bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Export formats the service can produce: `(value, label)`.
pub const EXPORT_FORMATS: &[(&str, &str)] = &[
    ("txt", "Plain text"),
    ("html", "HTML"),
    ("json", "JSON"),
    ("svg", "SVG"),
];

/// Everything one render call sends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderRequest {
    pub text: String,
    pub banner: String,
    pub alignment: Alignment,
    pub global_color: String,
    /// `(target, color)` pairs, positionally aligned on the wire.
    pub color_targets: Vec<(String, String)>,
}

impl RenderRequest {
    /// Build a request from current state.
    ///
    /// `None` when the trimmed text is empty; the caller must treat that as a
    /// silent no-op, not an error.
    #[must_use]
    pub fn from_state(form: &FormState, colors: &ColorBoard) -> Option<Self> {
        let text = form.trimmed_text();
        if text.is_empty() {
            return None;
        }
        // Every configured target is paired with the single current override
        // color; duplicates in the list are re-sent as typed.
        let target_color = colors.hex(ChannelKind::Target).to_owned();
        let color_targets = form
            .parsed_targets()
            .into_iter()
            .map(|target| (target, target_color.clone()))
            .collect();
        Some(Self {
            text: text.to_owned(),
            banner: form.banner.clone(),
            alignment: form.alignment,
            global_color: colors.hex(ChannelKind::Global).to_owned(),
            color_targets,
        })
    }

    /// Ordered wire fields; each target repeats the `colorTarget` /
    /// `targetColor` pair.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("inputText", self.text.clone()),
            ("banner", self.banner.clone()),
            ("align", self.alignment.as_str().to_owned()),
            ("color", self.global_color.clone()),
        ];
        for (target, color) in &self.color_targets {
            fields.push(("colorTarget", target.clone()));
            fields.push(("targetColor", color.clone()));
        }
        fields
    }

    /// Urlencoded request body.
    #[must_use]
    pub fn encode(&self) -> String {
        encode_fields(&self.form_fields())
    }
}

/// Everything one export call sends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportRequest {
    /// The rendered preview's text, exactly as displayed.
    pub ascii_text: String,
    pub format: String,
    pub filename: String,
}

impl ExportRequest {
    /// Build a request from the rendered preview text and the panel inputs.
    ///
    /// `None` when the preview text is empty or whitespace-only; the caller
    /// shows the empty-export notice and skips the network. A blank filename
    /// falls back to the default base name.
    #[must_use]
    pub fn from_parts(preview_text: &str, format: &str, filename: &str) -> Option<Self> {
        if preview_text.trim().is_empty() {
            return None;
        }
        let filename = filename.trim();
        let filename = if filename.is_empty() {
            DEFAULT_EXPORT_BASENAME
        } else {
            filename
        };
        Some(Self {
            ascii_text: preview_text.to_owned(),
            format: format.to_owned(),
            filename: filename.to_owned(),
        })
    }

    /// Ordered wire fields.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("asciiText", self.ascii_text.clone()),
            ("format", self.format.clone()),
            ("filename", self.filename.clone()),
        ]
    }

    /// Urlencoded request body.
    #[must_use]
    pub fn encode(&self) -> String {
        encode_fields(&self.form_fields())
    }

    /// Name offered for the downloaded file.
    #[must_use]
    pub fn download_name(&self) -> String {
        format!("{}.{}", self.filename, self.format)
    }
}

/// How one render call resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Service accepted; `markup` is the HTML fragment to show verbatim.
    Rendered { markup: String },
    /// Service answered non-success; `message` is the literal response body.
    Rejected { message: String },
    /// No response at all; `message` describes the transport failure.
    NetworkFailed { message: String },
}

fn encode_fields(fields: &[(&str, String)]) -> String {
    fields
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
