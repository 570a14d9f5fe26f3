//! Envelope types serialized by the API surface.
//!
//! # Responsibility
//! - Define the structured success/payload wrapper for every operation.
//!
//! # Invariants
//! - Every envelope carries a `success` flag.
//! - Payload fields appear only on the branch they belong to; `get_note`
//!   is the one exception where `note` is always present, null on miss.

use pimnote_core::{Note, NotePreview, NoteView};
use serde::Serialize;

/// Success/message envelope shared by all mutating acknowledgements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionEnvelope {
    pub success: bool,
    pub message: String,
}

impl ActionEnvelope {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Envelope for `get_note`: the `note` key is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteEnvelope {
    pub success: bool,
    pub note: Option<Note>,
}

impl NoteEnvelope {
    pub fn found(note: Note) -> Self {
        Self {
            success: true,
            note: Some(note),
        }
    }

    pub fn not_found() -> Self {
        Self {
            success: false,
            note: None,
        }
    }
}

/// Envelope for the in-place viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewEnvelope {
    pub success: bool,
    #[serde(flatten)]
    pub preview: Option<NotePreview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PreviewEnvelope {
    pub fn found(preview: NotePreview) -> Self {
        Self {
            success: true,
            preview: Some(preview),
            message: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            success: false,
            preview: None,
            message: Some(message.into()),
        }
    }
}

/// Envelope for the full-page viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewEnvelope {
    pub success: bool,
    #[serde(flatten)]
    pub view: Option<NoteView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ViewEnvelope {
    pub fn found(view: NoteView) -> Self {
        Self {
            success: true,
            view: Some(view),
            message: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            success: false,
            view: None,
            message: Some(message.into()),
        }
    }
}

/// Envelope for search: full matching note records in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchEnvelope {
    pub success: bool,
    pub results: Vec<Note>,
}

impl SearchEnvelope {
    pub fn with_results(results: Vec<Note>) -> Self {
        Self {
            success: true,
            results,
        }
    }
}

/// Envelope for `add_tags`: the resulting tag list on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagsEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TagsEnvelope {
    pub fn updated(tags: Vec<String>) -> Self {
        Self {
            success: true,
            tags: Some(tags),
            message: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            success: false,
            tags: None,
            message: Some(message.into()),
        }
    }
}

/// Envelope for markdown rendering: `html` is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkdownEnvelope {
    pub success: bool,
    pub html: String,
}

impl MarkdownEnvelope {
    pub fn rendered(html: impl Into<String>) -> Self {
        Self {
            success: true,
            html: html.into(),
        }
    }
}
