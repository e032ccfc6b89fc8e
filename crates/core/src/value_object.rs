//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two item names
/// with the same text are the same name. To "modify" one, construct a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemName;

    fn same_value<T: ValueObject>(a: &T, b: &T) -> bool {
        a == b
    }

    #[test]
    fn item_names_compare_by_value() {
        let a = ItemName::parse("apple").unwrap();
        let b = ItemName::parse(String::from("apple")).unwrap();
        assert!(same_value(&a, &b));
        assert!(!same_value(&a, &ItemName::parse("apple ").unwrap()));
    }
}
