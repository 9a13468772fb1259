//! PDF object types.
//!
//! The tagged value representation for indirect objects and the identity
//! contract for references between them (PDF spec ISO 32000-1:2008,
//! Section 7.3). Objects hold [`ObjectRef`] values, never the referenced
//! object itself, so graphs with cycles (outline parent/child, layer
//! parent/child) carry no ownership cycles.

use std::collections::HashMap;

/// PDF object representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// Null object
    Null,
    /// Boolean value
    Boolean(bool),
    /// Integer value
    Integer(i64),
    /// Real (floating-point) value
    Real(f64),
    /// Raw byte string
    String(Vec<u8>),
    /// Text string, serialized as PDFDocEncoding or UTF-16BE with BOM
    Text(String),
    /// Name (starting with /)
    Name(String),
    /// Array of objects
    Array(Vec<Object>),
    /// Dictionary (key-value pairs)
    Dictionary(Dictionary),
    /// Stream (dictionary + opaque data)
    Stream {
        /// Stream dictionary
        dict: Dictionary,
        /// Stream data
        data: bytes::Bytes,
    },
    /// Indirect object reference
    Reference(ObjectRef),
}

/// Reference to an indirect object.
///
/// An immutable `(object number, generation)` pair issued by an
/// [`ObjectRegistry`](crate::registry::ObjectRegistry). It is a *name* that
/// the registry resolves to bytes at flush time, not an owning pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    /// Object number
    pub id: u32,
    /// Generation number
    pub gen: u16,
}

impl ObjectRef {
    /// Create a new object reference.
    pub fn new(id: u32, gen: u16) -> Self {
        Self { id, gen }
    }
}

impl std::fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.id, self.gen)
    }
}

impl Object {
    /// Get the type name of this object (without data).
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Null => "Null",
            Object::Boolean(_) => "Boolean",
            Object::Integer(_) => "Integer",
            Object::Real(_) => "Real",
            Object::String(_) => "String",
            Object::Text(_) => "Text",
            Object::Name(_) => "Name",
            Object::Array(_) => "Array",
            Object::Dictionary(_) => "Dictionary",
            Object::Stream { .. } => "Stream",
            Object::Reference(_) => "Reference",
        }
    }

    /// Whether this object delimits itself in an array.
    ///
    /// Arrays, dictionaries, names and strings carry their own opening
    /// delimiter, so no separating space is needed in front of them. This
    /// mirrors the byte-exact spacing rule of existing readers; do not
    /// simplify without verifying against their tokenizers.
    pub(crate) fn is_self_delimiting(&self) -> bool {
        matches!(
            self,
            Object::Array(_)
                | Object::Dictionary(_)
                | Object::Name(_)
                | Object::String(_)
                | Object::Text(_)
        )
    }

    /// Try to cast to integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Object::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to cast to name.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Object::Name(s) => Some(s),
            _ => None,
        }
    }

    /// Try to cast to dictionary. Works for both Dictionary and Stream objects.
    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Object::Dictionary(d) => Some(d),
            Object::Stream { dict, .. } => Some(dict),
            _ => None,
        }
    }

    /// Try to cast to array.
    pub fn as_array(&self) -> Option<&Vec<Object>> {
        match self {
            Object::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to cast to reference.
    pub fn as_reference(&self) -> Option<ObjectRef> {
        match self {
            Object::Reference(r) => Some(*r),
            _ => None,
        }
    }

    /// Try to cast to boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Object::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to cast to real number.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Object::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// Try to cast to raw string bytes.
    pub fn as_string(&self) -> Option<&[u8]> {
        match self {
            Object::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to cast to text string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Object::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Check if object is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Object::Null)
    }
}

/// A PDF dictionary: mapping from Name to Object.
///
/// Insertion order is irrelevant for lookup; keys are sorted when the
/// dictionary is serialized. Two distinct, both-legal states exist for any
/// key: absent, and present with a [`Object::Null`] value. [`Dictionary::set`]
/// takes `Option<Object>`, where `None` is the sentinel "absent" marker that
/// removes the key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary {
    entries: HashMap<String, Object>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key. `None` removes the key; `Some(Object::Null)` stores a
    /// PDF null, which is distinct from the key being absent.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Option<Object>>) {
        let key = key.into();
        match value.into() {
            Some(value) => {
                self.entries.insert(key, value);
            },
            None => {
                self.entries.remove(&key);
            },
        }
    }

    /// Get the value stored under a key, if any.
    pub fn get(&self, key: &str) -> Option<&Object> {
        self.entries.get(key)
    }

    /// Remove a key, returning the previous value if any.
    pub fn remove(&mut self, key: &str) -> Option<Object> {
        self.entries.remove(key)
    }

    /// Whether the key is present (a stored null counts as present).
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Object)> {
        self.entries.iter()
    }

    /// Keys in serialization order (sorted).
    pub fn sorted_keys(&self) -> Vec<&String> {
        let mut keys: Vec<_> = self.entries.keys().collect();
        keys.sort();
        keys
    }
}

impl FromIterator<(String, Object)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (String, Object)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Render capability shared by every entity that can appear in the output.
///
/// A single operation replacing the deep inheritance of dictionary-derived
/// types: each entity owns a generic [`Object`] value plus its own typed
/// fields and exposes the finished object through this trait.
pub trait ToObject {
    /// Render this entity as a PDF object value.
    fn to_object(&self) -> Object;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_integer() {
        let obj = Object::Integer(42);
        assert_eq!(obj.as_integer(), Some(42));
        assert!(obj.as_name().is_none());
        assert!(!obj.is_null());
    }

    #[test]
    fn test_object_name() {
        let obj = Object::Name("Type".to_string());
        assert_eq!(obj.as_name(), Some("Type"));
        assert!(obj.as_integer().is_none());
    }

    #[test]
    fn test_object_string_variants() {
        let raw = Object::String(b"\x00\xff".to_vec());
        assert_eq!(raw.as_string(), Some(&b"\x00\xff"[..]));
        assert!(raw.as_text().is_none());

        let text = Object::Text("Kapitel".to_string());
        assert_eq!(text.as_text(), Some("Kapitel"));
        assert!(text.as_string().is_none());
    }

    #[test]
    fn test_object_reference() {
        let obj_ref = ObjectRef::new(10, 0);
        let obj = Object::Reference(obj_ref);
        assert_eq!(obj.as_reference(), Some(obj_ref));
        assert_eq!(obj_ref.id, 10);
        assert_eq!(obj_ref.gen, 0);
    }

    #[test]
    fn test_object_ref_display() {
        assert_eq!(format!("{}", ObjectRef::new(10, 0)), "10 0 R");
        assert_eq!(format!("{}", ObjectRef::new(3, 1)), "3 1 R");
    }

    #[test]
    fn test_object_ref_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(ObjectRef::new(1, 0));
        set.insert(ObjectRef::new(2, 0));
        set.insert(ObjectRef::new(1, 0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_self_delimiting_kinds() {
        assert!(Object::Name("Fit".to_string()).is_self_delimiting());
        assert!(Object::Array(vec![]).is_self_delimiting());
        assert!(Object::Dictionary(Dictionary::new()).is_self_delimiting());
        assert!(Object::String(b"x".to_vec()).is_self_delimiting());
        assert!(Object::Text("x".to_string()).is_self_delimiting());

        assert!(!Object::Null.is_self_delimiting());
        assert!(!Object::Integer(1).is_self_delimiting());
        assert!(!Object::Real(0.5).is_self_delimiting());
        assert!(!Object::Boolean(true).is_self_delimiting());
        assert!(!Object::Reference(ObjectRef::new(1, 0)).is_self_delimiting());
    }

    #[test]
    fn test_dictionary_set_and_get() {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name("Page".to_string()));
        assert_eq!(dict.get("Type").and_then(Object::as_name), Some("Page"));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_dictionary_absent_marker_removes_key() {
        let mut dict = Dictionary::new();
        dict.set("F", Object::Integer(4));
        assert!(dict.contains_key("F"));

        dict.set("F", None);
        assert!(!dict.contains_key("F"));
        assert!(dict.is_empty());
    }

    #[test]
    fn test_dictionary_null_is_distinct_from_absent() {
        let mut dict = Dictionary::new();
        dict.set("Dest", Object::Null);
        assert!(dict.contains_key("Dest"));
        assert!(dict.get("Dest").unwrap().is_null());

        dict.set("Dest", None);
        assert!(!dict.contains_key("Dest"));
        assert!(dict.get("Dest").is_none());
    }

    #[test]
    fn test_dictionary_sorted_keys() {
        let mut dict = Dictionary::new();
        dict.set("Rect", Object::Null);
        dict.set("Contents", Object::Null);
        dict.set("F", Object::Null);
        let keys = dict.sorted_keys();
        assert_eq!(keys, vec!["Contents", "F", "Rect"]);
    }

    #[test]
    fn test_stream_dict_access() {
        let mut dict = Dictionary::new();
        dict.set("Length", Object::Integer(100));
        let obj = Object::Stream {
            dict,
            data: bytes::Bytes::from_static(b"stream data"),
        };
        let d = obj.as_dict().unwrap();
        assert_eq!(d.get("Length").unwrap().as_integer(), Some(100));
    }
}
