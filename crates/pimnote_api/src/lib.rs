//! JSON envelope surface for PimNote.
//! Every operation returns a serialized envelope with a `success` flag.

pub mod api;
pub mod envelope;

pub use api::Pim;
pub use envelope::{
    ActionEnvelope, MarkdownEnvelope, NoteEnvelope, PreviewEnvelope, SearchEnvelope,
    TagsEnvelope, ViewEnvelope,
};
