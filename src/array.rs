//! Ordered heterogeneous object sequences.

use crate::object::{Object, ToObject};

/// An ordered sequence of PDF objects.
///
/// Duplicates are allowed and nulls are kept: a stored [`Object::Null`] is
/// serialized as `null`, never omitted. No operation on an array can fail.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PdfArray {
    elements: Vec<Object>,
}

impl PdfArray {
    /// Create an empty array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an array from existing elements.
    pub fn from_elements(elements: Vec<Object>) -> Self {
        Self { elements }
    }

    /// Append a value at the end.
    pub fn push(&mut self, value: Object) {
        self.elements.push(value);
    }

    /// Insert a value in front of all existing elements.
    pub fn prepend(&mut self, value: Object) {
        self.elements.insert(0, value);
    }

    /// Whether the array contains a value equal to `value`.
    pub fn contains(&self, value: &Object) -> bool {
        self.elements.contains(value)
    }

    /// A copy of the elements in insertion order.
    ///
    /// Mutating the returned vector does not affect the array.
    pub fn elements(&self) -> Vec<Object> {
        self.elements.clone()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the array is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl ToObject for PdfArray {
    fn to_object(&self) -> Object {
        Object::Array(self.elements.clone())
    }
}

impl FromIterator<Object> for PdfArray {
    fn from_iter<T: IntoIterator<Item = Object>>(iter: T) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::ObjectSerializer;

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut arr = PdfArray::new();
        for i in 0..5 {
            arr.push(Object::Integer(i));
        }
        let elements = arr.elements();
        for (i, e) in elements.iter().enumerate() {
            assert_eq!(e.as_integer(), Some(i as i64));
        }
    }

    #[test]
    fn test_prepend() {
        let mut arr = PdfArray::from_elements(vec![Object::Integer(2), Object::Integer(3)]);
        arr.prepend(Object::Integer(1));
        assert_eq!(arr.elements()[0].as_integer(), Some(1));
        assert_eq!(arr.len(), 3);
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut arr = PdfArray::new();
        arr.push(Object::Integer(7));
        arr.push(Object::Integer(7));
        assert_eq!(arr.len(), 2);
        assert!(arr.contains(&Object::Integer(7)));
    }

    #[test]
    fn test_elements_is_a_snapshot() {
        let mut arr = PdfArray::new();
        arr.push(Object::Integer(1));
        let mut copy = arr.elements();
        copy.push(Object::Integer(2));
        assert_eq!(arr.len(), 1);
    }

    #[test]
    fn test_null_serialized_not_omitted() {
        let mut arr = PdfArray::new();
        arr.push(Object::Integer(1));
        arr.push(Object::Null);
        arr.push(Object::Integer(2));
        let s = ObjectSerializer::new();
        assert_eq!(s.serialize_to_string(&arr.to_object()), "[1 null 2]");
    }

    #[test]
    fn test_serialize_twice_identical() {
        let arr = PdfArray::from_elements(vec![
            Object::Integer(1),
            Object::Name("N".to_string()),
            Object::Real(0.25),
        ]);
        let s = ObjectSerializer::new();
        assert_eq!(s.serialize(&arr.to_object()), s.serialize(&arr.to_object()));
    }
}
