//! Document outline (bookmark) tree (PDF spec ISO 32000-1:2008,
//! Section 12.3.3).
//!
//! Outline entries form a tree with back-references to their parents, which
//! would be an ownership cycle if nodes owned each other. The tree is kept
//! as an arena of nodes with index-based parent pointers instead: a node can
//! only be created with an already-existing parent, so the index chain is
//! finite and acyclic and `level()` always terminates.
//!
//! An entry created with a destination that has no page yet is bound to the
//! registry's current page at construction time. Callers rely on that
//! timing: bookmarks declared before "start new page" land on the page that
//! was open at the moment of declaration.

use crate::destination::Destination;
use crate::error::Result;
use crate::object::{Dictionary, Object, ObjectRef, ToObject};
use crate::registry::ObjectRegistry;

bitflags::bitflags! {
    /// Text style flags for an outline entry (PDF spec Table 153).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct OutlineStyle: i64 {
        /// Display the title in italic
        const ITALIC = 0x1;
        /// Display the title in bold
        const BOLD = 0x2;
    }
}

/// Handle to one entry in an [`Outlines`] tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutlineId(usize);

/// One bookmark tree node.
#[derive(Debug)]
struct OutlineNode {
    title: String,
    parent: Option<OutlineId>,
    children: Vec<OutlineId>,
    destination: Option<Destination>,
    open: bool,
    count: i64,
    color: Option<[f32; 3]>,
    style: OutlineStyle,
    reference: Option<ObjectRef>,
}

/// The outline tree of one document.
///
/// Created with a root entry (the `/Outlines` dictionary); every other entry
/// is added under an existing parent and lives as long as the tree. There is
/// no standalone deletion.
#[derive(Debug)]
pub struct Outlines {
    nodes: Vec<OutlineNode>,
}

impl Outlines {
    /// Create an outline tree containing only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![OutlineNode {
                title: String::new(),
                parent: None,
                children: Vec::new(),
                destination: None,
                open: true,
                count: 0,
                color: None,
                style: OutlineStyle::empty(),
                reference: None,
            }],
        }
    }

    /// The root entry.
    pub fn root(&self) -> OutlineId {
        OutlineId(0)
    }

    /// Total number of entries, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds only the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Add an entry under `parent`.
    ///
    /// The entry is appended to the parent's children first. If `destination`
    /// is present and not yet page-bound, it is then bound to the registry's
    /// current page; a [`NoOpenPage`](crate::Error::NoOpenPage) failure
    /// surfaces to the caller and is not rolled back — the entry stays in
    /// the tree with its destination unbound (and an unbound destination is
    /// never emitted at serialization).
    pub fn add<R: ObjectRegistry>(
        &mut self,
        registry: &mut R,
        parent: OutlineId,
        title: impl Into<String>,
        destination: Option<Destination>,
        open: bool,
    ) -> Result<OutlineId> {
        let id = OutlineId(self.nodes.len());
        self.nodes.push(OutlineNode {
            title: title.into(),
            parent: Some(parent),
            children: Vec::new(),
            destination,
            open,
            count: 0,
            color: None,
            style: OutlineStyle::empty(),
            reference: None,
        });
        self.nodes[parent.0].children.push(id);

        if let Some(dest) = self.nodes[id.0].destination.as_mut() {
            if !dest.has_page() {
                let page = registry.current_page()?;
                dest.add_page(page);
                log::debug!("bound outline destination to {}", page);
            }
        }
        Ok(id)
    }

    /// Depth of an entry: 0 for the root, else one more than its parent.
    pub fn level(&self, id: OutlineId) -> usize {
        match self.nodes[id.0].parent {
            Some(parent) => self.level(parent) + 1,
            None => 0,
        }
    }

    /// The entry's title.
    pub fn title(&self, id: OutlineId) -> &str {
        &self.nodes[id.0].title
    }

    /// The entry's parent, `None` for the root.
    pub fn parent(&self, id: OutlineId) -> Option<OutlineId> {
        self.nodes[id.0].parent
    }

    /// The entry's children in insertion order.
    ///
    /// The flush path derives `/First` and `/Last` from this.
    pub fn children(&self, id: OutlineId) -> &[OutlineId] {
        &self.nodes[id.0].children
    }

    /// The entry's destination, if any.
    pub fn destination(&self, id: OutlineId) -> Option<&Destination> {
        self.nodes[id.0].destination.as_ref()
    }

    /// Whether the entry is initially open (expanded).
    pub fn is_open(&self, id: OutlineId) -> bool {
        self.nodes[id.0].open
    }

    /// The entry's `/Count` value.
    pub fn count(&self, id: OutlineId) -> i64 {
        self.nodes[id.0].count
    }

    /// Set the `/Count` value.
    ///
    /// Set by whatever walks the finished tree, following the PDF
    /// convention: the number of open descendants if the entry is open, the
    /// negated number of all descendants if closed, 0 for a leaf. A zero
    /// count is omitted at serialization.
    pub fn set_count(&mut self, id: OutlineId, count: i64) {
        self.nodes[id.0].count = count;
    }

    /// Set the title color (RGB, 0.0–1.0). Pure black is the viewer default
    /// and is omitted at serialization.
    pub fn set_color(&mut self, id: OutlineId, color: [f32; 3]) {
        self.nodes[id.0].color = Some(color);
    }

    /// Set the title text style.
    pub fn set_style(&mut self, id: OutlineId, style: OutlineStyle) {
        self.nodes[id.0].style = style;
    }

    /// The entry's indirect reference, allocated lazily and memoized.
    ///
    /// Repeated calls return the same value; re-allocating would leave
    /// duplicate or orphaned outline objects in the output.
    pub fn reference<R: ObjectRegistry>(&mut self, registry: &mut R, id: OutlineId) -> ObjectRef {
        if let Some(reference) = self.nodes[id.0].reference {
            return reference;
        }
        let reference = registry.allocate_reference();
        self.nodes[id.0].reference = Some(reference);
        reference
    }

    /// Render an entry's dictionary.
    ///
    /// The root renders as the `/Outlines` dictionary. Non-root entries get
    /// `/Title` and `/Parent`; `/Dest` only when a destination exists and is
    /// page-bound (an unbound target is silently dropped rather than emitted
    /// dangling); `/F` and `/Count` only when nonzero; `/C` only when a
    /// color is set and is not pure black. `/First` and `/Last` are derived
    /// from [`children`](Outlines::children) by the flush path.
    pub fn to_dictionary<R: ObjectRegistry>(
        &mut self,
        registry: &mut R,
        id: OutlineId,
    ) -> Object {
        let parent_ref = self.nodes[id.0]
            .parent
            .map(|parent| self.reference(registry, parent));

        let node = &self.nodes[id.0];
        let mut dict = Dictionary::new();
        match parent_ref {
            None => {
                dict.set("Type", Object::Name("Outlines".to_string()));
            },
            Some(parent_ref) => {
                dict.set("Title", Object::Text(node.title.clone()));
                dict.set("Parent", Object::Reference(parent_ref));

                if let Some(dest) = &node.destination {
                    if dest.has_page() {
                        dict.set("Dest", dest.to_object());
                    }
                }

                let flags = node.style.bits();
                if flags != 0 {
                    dict.set("F", Object::Integer(flags));
                }

                if let Some(color) = node.color {
                    if color != [0.0, 0.0, 0.0] {
                        dict.set(
                            "C",
                            Object::Array(
                                color.iter().map(|&c| Object::Real(c as f64)).collect(),
                            ),
                        );
                    }
                }
            },
        }

        if node.count != 0 {
            dict.set("Count", Object::Integer(node.count));
        }

        Object::Dictionary(dict)
    }
}

impl Default for Outlines {
    fn default() -> Self {
        Self::new()
    }
}
