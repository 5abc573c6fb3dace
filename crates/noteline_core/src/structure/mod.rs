//! Structural locator: key line indexes of a note.
//!
//! # Responsibility
//! - Find the frontmatter end, the active body bounds, the smart prepend
//!   point and the metadata line.
//! - Normalize empty notes so every returned index is insertable.
//!
//! # Invariants
//! - Lookups read only the current snapshot; indexes are recomputed on every
//!   call and never cached across a mutation.
//! - The only mutations are appending/inserting a single empty paragraph in
//!   `active_content_start` and `metadata_line`.
//!
//! # See also
//! - `crate::section` for removal of whole heading sections.

pub mod active;
pub mod frontmatter;
pub mod metadata;
pub mod patterns;
pub mod prepend;

pub use active::{active_content_end, active_content_range, active_content_start};
pub use frontmatter::{find_frontmatter_end, frontmatter_end_index};
pub use metadata::{find_metadata_line, metadata_line};
pub use prepend::{smart_prepend_paragraph, smart_prepend_point};
