//! Navigation destinations (PDF spec ISO 32000-1:2008, Section 12.3.2).
//!
//! A destination is a page plus view-fit instructions. It is built before
//! its page is known: the fit mode and parameter go in first, and the page
//! reference is prepended later, exactly once, when it becomes available.

use crate::array::PdfArray;
use crate::object::{Object, ObjectRef, ToObject};

/// Page fit mode for destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Fit the page width, with top at the given position (default)
    #[default]
    FitH,
    /// Fit the page height, with left at the given position
    FitV,
    /// Fit the bounding box width
    FitBH,
    /// Fit the bounding box height
    FitBV,
}

impl FitMode {
    /// Parse a fit mode name. Anything unrecognized maps to [`FitMode::FitH`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "FitV" => Self::FitV,
            "FitBH" => Self::FitBH,
            "FitBV" => Self::FitBV,
            _ => Self::FitH,
        }
    }

    /// The PDF name for this fit mode.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::FitH => "FitH",
            Self::FitV => "FitV",
            Self::FitBH => "FitBH",
            Self::FitBV => "FitBV",
        }
    }
}

/// A navigation target: a page with view-fit instructions.
///
/// Starts out as `[/FitX param]` and becomes `[pageRef /FitX param]` once a
/// page is bound. A destination never allocates its own indirect reference;
/// it is always embedded by value inside another dictionary (an outline
/// entry's `/Dest` key).
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    array: PdfArray,
    has_page: bool,
}

impl Destination {
    /// Create a destination with the given fit mode and parameter.
    pub fn new(fit: FitMode, parameter: f64) -> Self {
        let mut array = PdfArray::new();
        array.push(Object::Name(fit.pdf_name().to_string()));
        array.push(Object::Real(parameter));
        Self {
            array,
            has_page: false,
        }
    }

    /// Bind the destination to a page. One-time operation.
    ///
    /// Prepends the page reference in front of the fit-mode name and returns
    /// `true`. If a page is already bound, returns `false` and leaves the
    /// array untouched.
    pub fn add_page(&mut self, page: ObjectRef) -> bool {
        if self.has_page {
            return false;
        }
        self.array.prepend(Object::Reference(page));
        self.has_page = true;
        true
    }

    /// Whether a page has been bound.
    pub fn has_page(&self) -> bool {
        self.has_page
    }

    /// The underlying array elements, for inspection.
    pub fn elements(&self) -> Vec<Object> {
        self.array.elements()
    }
}

impl ToObject for Destination {
    fn to_object(&self) -> Object {
        self.array.to_object()
    }
}
