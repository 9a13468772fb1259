//! Optional Content Groups — PDF layers (PDF spec ISO 32000-1:2008,
//! Section 8.11).
//!
//! Layers form a parent/child visibility tree, kept as an arena with
//! index-based parent pointers like the outline tree. A layer's indirect
//! reference is assigned externally (by whatever writer flushes the OCG
//! objects) and must never change afterwards: viewers match layers by
//! reference identity.

use crate::error::{Error, Result};
use crate::object::{Dictionary, Object, ObjectRef};

/// Handle to one layer in a [`Layers`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(usize);

#[derive(Debug)]
struct LayerNode {
    dict: Dictionary,
    title: String,
    parent: Option<LayerId>,
    children: Vec<LayerId>,
    on: bool,
    on_panel: bool,
    reference: Option<ObjectRef>,
}

/// The layer (OCG) forest of one document.
#[derive(Debug, Default)]
pub struct Layers {
    nodes: Vec<LayerNode>,
}

impl Layers {
    /// Create an empty layer collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached layer with the given display title.
    ///
    /// The backing dictionary is seeded with `/Type /OCG` and `/Name`.
    /// The layer is visible and listed in the viewer panel by default.
    pub fn add(&mut self, title: impl Into<String>) -> LayerId {
        let title = title.into();
        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name("OCG".to_string()));
        dict.set("Name", Object::Text(title.clone()));

        let id = LayerId(self.nodes.len());
        self.nodes.push(LayerNode {
            dict,
            title,
            parent: None,
            children: Vec::new(),
            on: true,
            on_panel: true,
            reference: None,
        });
        id
    }

    /// Attach `child` under `parent`.
    ///
    /// A layer has at most one parent; attaching an already-attached layer
    /// fails with [`Error::LayerParentAlreadySet`] and changes nothing.
    pub fn attach(&mut self, parent: LayerId, child: LayerId) -> Result<()> {
        if self.nodes[child.0].parent.is_some() {
            return Err(Error::LayerParentAlreadySet(self.nodes[child.0].title.clone()));
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    /// Assign the layer's indirect reference. One-time operation.
    ///
    /// Fails with [`Error::LayerReferenceAssigned`] if a reference was
    /// already assigned; the existing reference is left unchanged.
    pub fn assign_reference(&mut self, id: LayerId, reference: ObjectRef) -> Result<()> {
        if self.nodes[id.0].reference.is_some() {
            return Err(Error::LayerReferenceAssigned(self.nodes[id.0].title.clone()));
        }
        self.nodes[id.0].reference = Some(reference);
        Ok(())
    }

    /// The layer's assigned indirect reference.
    pub fn reference(&self, id: LayerId) -> Result<ObjectRef> {
        self.nodes[id.0]
            .reference
            .ok_or_else(|| Error::LayerUnreferenced(self.nodes[id.0].title.clone()))
    }

    /// The layer's parent, if attached.
    pub fn parent(&self, id: LayerId) -> Option<LayerId> {
        self.nodes[id.0].parent
    }

    /// The layer's children in attachment order.
    pub fn children(&self, id: LayerId) -> &[LayerId] {
        &self.nodes[id.0].children
    }

    /// The layer's display title.
    pub fn title(&self, id: LayerId) -> &str {
        &self.nodes[id.0].title
    }

    /// Whether the layer is visible by default.
    pub fn is_on(&self, id: LayerId) -> bool {
        self.nodes[id.0].on
    }

    /// Set default visibility.
    pub fn set_on(&mut self, id: LayerId, on: bool) {
        self.nodes[id.0].on = on;
    }

    /// Whether the layer is listed in the viewer's layer panel.
    pub fn is_on_panel(&self, id: LayerId) -> bool {
        self.nodes[id.0].on_panel
    }

    /// Set whether the layer is listed in the viewer's layer panel.
    pub fn set_on_panel(&mut self, id: LayerId, on_panel: bool) {
        self.nodes[id.0].on_panel = on_panel;
    }

    /// Set the display name stored under `/Name`.
    pub fn set_name(&mut self, id: LayerId, name: impl Into<String>) {
        self.nodes[id.0].dict.set("Name", Object::Text(name.into()));
    }

    /// Read access to a layer's backing dictionary.
    pub fn dictionary(&self, id: LayerId) -> &Dictionary {
        &self.nodes[id.0].dict
    }

    /// Render the layer's OCG dictionary.
    pub fn to_object(&self, id: LayerId) -> Object {
        Object::Dictionary(self.nodes[id.0].dict.clone())
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no layers exist.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
