//! Domain model for accounts and notes.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep serialization shapes aligned with the envelope surface.
//!
//! # Invariants
//! - A note is owned by exactly one user and is looked up by title.
//! - Optional note fields serialize only when present.

pub mod account;
pub mod note;
