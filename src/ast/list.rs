use std::slice::Iter;

/// An ordered, possibly empty sequence of AST nodes.
///
/// Declaration lists and the statements of a `begin` block are built by
/// appending, so the order of the list is always source order.
#[derive(Debug, Clone, PartialEq)]
pub struct AstList<T> {
    items: Vec<T>,
}

impl<T> AstList<T> {
    pub fn empty() -> Self {
        AstList { items: Vec::new() }
    }

    pub fn singleton(item: T) -> Self {
        AstList { items: vec![item] }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Everything after the first element.
    pub fn rest(&self) -> &[T] {
        self.items.get(1..).unwrap_or(&[])
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Attaches `other` to the tail of this list.
    pub fn splice(&mut self, mut other: AstList<T>) {
        self.items.append(&mut other.items);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for AstList<T> {
    fn default() -> Self {
        AstList::empty()
    }
}

impl<T> FromIterator<T> for AstList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        AstList { items: iter.into_iter().collect() }
    }
}

impl<T> IntoIterator for AstList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a AstList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::AstList;

    #[test]
    fn test_empty_list() {
        let list: AstList<u8> = AstList::empty();

        assert!(list.is_empty());
        assert_eq!(list.first(), None);
        assert!(list.rest().is_empty());
    }

    #[test]
    fn test_first_and_rest() {
        let list: AstList<u8> = vec![1, 2, 3].into_iter().collect();

        assert_eq!(list.first(), Some(&1));
        assert_eq!(list.rest(), &[2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_splice_keeps_order() {
        let mut head = AstList::singleton(1);
        head.push(2);

        let mut tail = AstList::singleton(3);
        tail.splice(AstList::empty());
        tail.push(4);

        head.splice(tail);

        assert_eq!(head.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }
}
