//! Error types for the document-structure model.
//!
//! Only registry-capability failures and identity violations are errors;
//! idempotent rejections (e.g. binding a page to an already-bound
//! destination) are reported as plain booleans by the operations themselves.

/// Result type alias for document-structure operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building the object graph.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A reference to the current page was requested while no page is open.
    ///
    /// The core never guesses a substitute page.
    #[error("No page is currently open")]
    NoOpenPage,

    /// A page number could not be resolved to a page reference.
    #[error("Page {page} out of range: document has {count} page(s)")]
    PageOutOfRange {
        /// Requested page number (1-based)
        page: usize,
        /// Number of pages known to the registry
        count: usize,
    },

    /// A layer's parent was already set and cannot be reassigned.
    #[error("Layer '{0}' already has a parent")]
    LayerParentAlreadySet(String),

    /// A layer's indirect reference was already assigned.
    ///
    /// Viewers match layers by reference identity, so the reference must
    /// never change once assigned.
    #[error("Layer '{0}' already has an indirect reference assigned")]
    LayerReferenceAssigned(String),

    /// A layer's indirect reference was requested before one was assigned.
    #[error("Layer '{0}' has no indirect reference assigned yet")]
    LayerUnreferenced(String),
}
