//! # pdf_doctree
//!
//! The indirect-object graph and document-structure model underlying a
//! PDF-producing library: representation, identity resolution, and
//! byte-exact serialization of the objects that give a document its
//! navigable structure — arrays, destinations, bookmark (outline) trees,
//! page annotations, and optional-content (layer) trees.
//!
//! ## Core pieces
//!
//! - [`Object`] / [`ObjectRef`]: the tagged value representation and the
//!   `(object number, generation)` reference identity between objects.
//!   References are names resolved at flush time, never owning pointers, so
//!   mutually-referencing graphs carry no ownership cycles.
//! - [`ObjectSerializer`]: format-exact byte serialization (PDF spec
//!   ISO 32000-1:2008, Section 7.3 syntax).
//! - [`ObjectRegistry`]: the collaborator interface a file writer exposes to
//!   allocate references and resolve pages; [`DocumentRegistry`] is a
//!   sequential in-memory implementation.
//! - [`PdfArray`], [`Destination`], [`Outlines`], [`Annotation`], [`Layers`]:
//!   the structure entities themselves.
//!
//! Entities are constructed while the page stream is still being produced;
//! destinations and bookmarks may be declared before their target page is
//! known and are bound to the registry's current page at construction time.
//!
//! ## Quick Start
//!
//! ```
//! use pdf_doctree::{Destination, DocumentRegistry, FitMode, Outlines};
//!
//! # fn main() -> pdf_doctree::Result<()> {
//! let mut registry = DocumentRegistry::new();
//! registry.begin_page();
//!
//! let mut outlines = Outlines::new();
//! let root = outlines.root();
//! let dest = Destination::new(FitMode::FitH, 792.0);
//! let chapter = outlines.add(&mut registry, root, "Chapter 1", Some(dest), true)?;
//! assert_eq!(outlines.level(chapter), 1);
//! # Ok(())
//! # }
//! ```
//!
//! Single-writer, single-threaded composition model: one document is built
//! by one logical thread of control. Nothing here blocks or retries.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Core object model
pub mod object;
pub mod serializer;

// Reference allocation and page resolution
pub mod registry;

// Document structure
pub mod annotation;
pub mod array;
pub mod destination;
pub mod layer;
pub mod outline;

// Re-exports
pub use annotation::{Annotation, AnnotationFlags};
pub use array::PdfArray;
pub use destination::{Destination, FitMode};
pub use error::{Error, Result};
pub use layer::{LayerId, Layers};
pub use object::{Dictionary, Object, ObjectRef, ToObject};
pub use outline::{OutlineId, OutlineStyle, Outlines};
pub use registry::{DocumentRegistry, ObjectRegistry};
pub use serializer::ObjectSerializer;

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
