//! Preview state and the reducer that folds render outcomes into it.
//!
//! The preview region shows at most one of: the rendered fragment or an error
//! message. `PreviewState` keeps that exclusivity plus the alignment class and
//! the background color in one value, so the view layer only binds fields and
//! never re-derives rules. Responses are applied in arrival order; a late
//! response simply supersedes whatever is showing. That race is accepted and
//! documented rather than prevented: requests are never cancelled in flight,
//! and at human timescales the 500 ms debounce makes overlap rare.
//!
//! `plain_text` recovers the visible characters from the rendered fragment
//! (tags stripped, `<br>` as newline, standard entities unescaped); it is what
//! export sends and what the CLI prints by default.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use crate::consts::{DEFAULT_BACKGROUND_COLOR, GENERIC_RENDER_ERROR};
use crate::form::Alignment;
use crate::request::RenderOutcome;

/// What the preview region currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewState {
    /// Rendered fragment, inserted verbatim into the inner container.
    pub markup: Option<String>,
    /// Alignment class on the preview container.
    pub align_class: &'static str,
    /// Preview background color, driven directly by the background channel.
    pub background: String,
    /// Visible error text. A successful render clears it.
    pub error: Option<String>,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            markup: None,
            align_class: Alignment::default().css_class(),
            background: DEFAULT_BACKGROUND_COLOR.to_owned(),
            error: None,
        }
    }
}

impl PreviewState {
    /// A generation attempt is about to dispatch: drop the previous error and
    /// preview content. Background and alignment are left alone until the
    /// response decides them.
    pub fn begin_render(&mut self) {
        self.markup = None;
        self.error = None;
    }

    /// Fold a render outcome in. `alignment` is the form's alignment at the
    /// time the request was built.
    pub fn apply_outcome(&mut self, alignment: Alignment, outcome: RenderOutcome) {
        match outcome {
            RenderOutcome::Rendered { markup } => {
                self.markup = Some(markup);
                self.align_class = alignment.css_class();
                self.error = None;
            }
            RenderOutcome::Rejected { message } => {
                let message = if message.trim().is_empty() {
                    GENERIC_RENDER_ERROR.to_owned()
                } else {
                    message
                };
                self.error = Some(message);
            }
            RenderOutcome::NetworkFailed { message } => {
                self.error = Some(format!("Network error: {message}"));
            }
        }
    }

    /// The visible text of the rendered preview; empty when nothing rendered.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.markup.as_deref().map(fragment_text).unwrap_or_default()
    }

    /// Back to the page-load state. Used by the clear action.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Visible text of an HTML fragment: tags stripped, `<br>` variants mapped to
/// newlines, standard entities unescaped. Whitespace is preserved exactly,
/// since the art depends on it.
#[must_use]
pub fn fragment_text(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(start) = rest.find('<') {
        text.push_str(&rest[..start]);
        let tag_onward = &rest[start..];
        let Some(end) = tag_onward.find('>') else {
            // Unterminated tag; browsers drop the trailing fragment too.
            rest = "";
            break;
        };
        if is_br_tag(&tag_onward[1..end]) {
            text.push('\n');
        }
        rest = &tag_onward[end + 1..];
    }
    text.push_str(rest);
    unescape_entities(&text)
}

fn is_br_tag(tag: &str) -> bool {
    tag.trim().trim_end_matches('/').trim_end().eq_ignore_ascii_case("br")
}

/// The escape set of the rendering service's HTML templating.
const ENTITIES: &[(&str, char)] = &[
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#34;", '"'),
    ("&#39;", '\''),
];

fn unescape_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];
        let mut replaced = false;
        for (entity, ch) in ENTITIES {
            if let Some(tail) = rest.strip_prefix(entity) {
                out.push(*ch);
                rest = tail;
                replaced = true;
                break;
            }
        }
        if !replaced {
            out.push('&');
            rest = &rest[1..];
        }
    }
    out.push_str(rest);
    out
}
