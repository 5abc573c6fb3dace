//! Line-level domain model for plain-text notes.
//!
//! # Responsibility
//! - Define the paragraph shape shared by every structural algorithm.
//! - Define the tagged lookup result used instead of numeric sentinels.
//!
//! # Invariants
//! - A paragraph's `line_index` equals its position in the note snapshot.
//! - Joining `raw_content` values with `\n` reconstructs the note text.

pub mod lookup;
pub mod paragraph;
