/// Implement the common list methods for a newtype around `Vec<$item>`.
macro_rules! record_list {
    ($list:ident, $item:ident) => {
        impl $list {
            /// Create an empty list.
            pub fn new() -> Self {
                Self(Vec::new())
            }

            /// Add an entry at the end.
            pub fn push(&mut self, item: $item) {
                self.0.push(item)
            }

            /// Number of entries.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Whether there are no entries.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// The entry at `index`, if there is one.
            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            /// Mutable access to the entry at `index`, if there is one.
            pub fn get_mut(&mut self, index: usize) -> Option<&mut $item> {
                self.0.get_mut(index)
            }

            /// Iterate over the entries.
            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }

            /// The entries as a slice.
            pub fn as_slice(&self) -> &[$item] {
                &self.0
            }
        }

        impl From<Vec<$item>> for $list {
            fn from(items: Vec<$item>) -> Self {
                Self(items)
            }
        }

        impl From<$list> for Vec<$item> {
            fn from(list: $list) -> Self {
                list.0
            }
        }

        impl FromIterator<$item> for $list {
            fn from_iter<I: IntoIterator<Item = $item>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }

        impl IntoIterator for $list {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<$item>;
            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $list {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;
            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}
