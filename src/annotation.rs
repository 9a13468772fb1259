//! Page annotations (PDF spec ISO 32000-1:2008, Section 12.5).
//!
//! An annotation is a page-attached dictionary with a stable, lazily
//! allocated identity. The reference memoization in
//! [`Annotation::indirect_reference`] is the component's central
//! correctness contract: allocating twice would duplicate the annotation
//! object in the output.

use crate::error::Result;
use crate::object::{Dictionary, Object, ObjectRef, ToObject};
use crate::registry::ObjectRegistry;

bitflags::bitflags! {
    /// Annotation flags (PDF spec Table 165).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AnnotationFlags: i64 {
        /// Do not display or print the annotation
        const HIDDEN = 1 << 1;
        /// Print the annotation when the page is printed
        const PRINT = 1 << 2;
    }
}

/// A page annotation under construction.
#[derive(Debug, Clone)]
pub struct Annotation {
    dict: Dictionary,
    reference: Option<ObjectRef>,
    used: bool,
}

impl Annotation {
    /// Create an annotation with the given bounding rectangle
    /// `[llx, lly, urx, ury]`.
    pub fn new(rect: [f64; 4]) -> Self {
        let mut dict = Dictionary::new();
        dict.set(
            "Rect",
            Object::Array(rect.iter().map(|&v| Object::Real(v)).collect()),
        );
        Self {
            dict,
            reference: None,
            used: false,
        }
    }

    /// Create a text note ("sticky note") annotation.
    pub fn text_note(
        llx: f64,
        lly: f64,
        urx: f64,
        ury: f64,
        title: impl Into<String>,
        contents: impl Into<String>,
    ) -> Self {
        let mut annotation = Self::new([llx, lly, urx, ury]);
        annotation.dict.set("Subtype", Object::Name("Text".to_string()));
        annotation.dict.set("T", Object::Text(title.into()));
        annotation.dict.set("Contents", Object::Text(contents.into()));
        annotation
    }

    /// The annotation's indirect reference, allocated lazily and memoized.
    ///
    /// The first call allocates from the registry and caches the result;
    /// every subsequent call returns the cached value unchanged.
    pub fn indirect_reference<R: ObjectRegistry>(&mut self, registry: &mut R) -> ObjectRef {
        match self.reference {
            Some(reference) => reference,
            None => {
                let reference = registry.allocate_reference();
                self.reference = Some(reference);
                reference
            },
        }
    }

    /// Set the annotation flags (`/F`).
    ///
    /// Empty flags remove the key entirely rather than writing zero: zero
    /// and absent are indistinguishable to a reader, and absent is what
    /// gets written.
    pub fn set_flags(&mut self, flags: AnnotationFlags) {
        if flags.is_empty() {
            self.dict.set("F", None);
        } else {
            self.dict.set("F", Object::Integer(flags.bits()));
        }
    }

    /// Set the annotation color (`/C`, RGB 0.0–1.0).
    pub fn set_color(&mut self, color: [f32; 3]) {
        self.dict.set(
            "C",
            Object::Array(color.iter().map(|&c| Object::Real(c as f64)).collect()),
        );
    }

    /// Set the title (`/T`).
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.dict.set("T", Object::Text(title.into()));
    }

    /// Set the contents text (`/Contents`).
    pub fn set_contents(&mut self, contents: impl Into<String>) {
        self.dict.set("Contents", Object::Text(contents.into()));
    }

    /// Set the annotation name (`/NM`), unique per page.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.dict.set("NM", Object::Text(name.into()));
    }

    /// Attach the annotation to a page by 1-based page number (`/P`).
    ///
    /// The number is resolved to a reference through the registry; a page
    /// that does not exist surfaces as
    /// [`PageOutOfRange`](crate::Error::PageOutOfRange).
    pub fn set_page<R: ObjectRegistry>(
        &mut self,
        registry: &mut R,
        page_number: usize,
    ) -> Result<()> {
        let page = registry.page_reference(page_number)?;
        self.dict.set("P", Object::Reference(page));
        Ok(())
    }

    /// Put the annotation on a layer (`/OC`).
    pub fn set_layer(&mut self, layer: ObjectRef) {
        self.dict.set("OC", Object::Reference(layer));
    }

    /// Whether the flush path has written this annotation.
    pub fn is_used(&self) -> bool {
        self.used
    }

    /// Mark the annotation as written. One-way; never unset.
    pub fn mark_used(&mut self) {
        self.used = true;
    }

    /// Read access to the backing dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }
}

impl ToObject for Annotation {
    fn to_object(&self) -> Object {
        Object::Dictionary(self.dict.clone())
    }
}
