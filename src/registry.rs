//! Object registry: reference allocation and page resolution.
//!
//! The registry is the collaborator that issues indirect references and
//! ultimately flushes objects to the output file. This crate consumes only
//! the narrow interface below; the full incremental file writer lives
//! elsewhere and implements [`ObjectRegistry`] on top of its own
//! cross-reference bookkeeping.

use crate::error::{Error, Result};
use crate::object::ObjectRef;

/// Reference allocation and page resolution, as consumed by the
/// document-structure entities.
///
/// Implementations must hand out strictly increasing object numbers and
/// never reuse one within a document. Every entity that needs identity
/// calls [`allocate_reference`](ObjectRegistry::allocate_reference) at most
/// once and caches the result; re-allocating would create duplicate or
/// dangling objects in the output.
pub trait ObjectRegistry {
    /// Allocate a fresh `(object number, generation)` pair.
    fn allocate_reference(&mut self) -> ObjectRef;

    /// The reference of the page presently being composed.
    ///
    /// Fails with [`Error::NoOpenPage`] if no page has been opened.
    fn current_page(&mut self) -> Result<ObjectRef>;

    /// Resolve a 1-based page number to that page's reference.
    fn page_reference(&mut self, page_number: usize) -> Result<ObjectRef>;
}

/// A sequential in-memory registry.
///
/// Issues object numbers starting at 1 and tracks one reference per begun
/// page. Suitable for tests and for callers assembling a document without
/// a full file writer; it never fabricates a reference for a page that has
/// not been begun.
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    next_id: u32,
    pages: Vec<ObjectRef>,
}

impl DocumentRegistry {
    /// Create a registry with no pages and object number 1 up next.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            pages: Vec::new(),
        }
    }

    /// Open a new page: allocates its reference and makes it current.
    pub fn begin_page(&mut self) -> ObjectRef {
        let page = self.allocate_reference();
        self.pages.push(page);
        log::debug!("began page {} as {}", self.pages.len(), page);
        page
    }

    /// Number of pages begun so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl ObjectRegistry for DocumentRegistry {
    fn allocate_reference(&mut self) -> ObjectRef {
        // next_id starts at 1, so a default-constructed registry still
        // allocates valid object numbers.
        if self.next_id == 0 {
            self.next_id = 1;
        }
        let reference = ObjectRef::new(self.next_id, 0);
        self.next_id += 1;
        log::trace!("allocated {}", reference);
        reference
    }

    fn current_page(&mut self) -> Result<ObjectRef> {
        self.pages.last().copied().ok_or(Error::NoOpenPage)
    }

    fn page_reference(&mut self, page_number: usize) -> Result<ObjectRef> {
        if page_number == 0 || page_number > self.pages.len() {
            return Err(Error::PageOutOfRange {
                page: page_number,
                count: self.pages.len(),
            });
        }
        Ok(self.pages[page_number - 1])
    }
}
