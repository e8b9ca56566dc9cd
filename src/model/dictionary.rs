use super::tag::Tag;

/// Per-record table of interned strings referenced by tag indices.
#[derive(Debug, Clone, Copy)]
pub struct Dictionary<'a> {
    words: &'a [String],
}

impl<'a> Dictionary<'a> {
    pub fn new(words: &'a [String]) -> Self {
        Self { words }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the string interned at `index`, or `None` if the index is out
    /// of range.
    #[inline]
    pub fn resolve(&self, index: u32) -> Option<&'a str> {
        self.words.get(index as usize).map(String::as_str)
    }

    /// Resolves a name/value index pair. Both ends must resolve.
    pub fn resolve_pair(&self, name: u32, value: u32) -> Option<Tag> {
        Some(Tag::new(self.resolve(name)?, self.resolve(value)?))
    }

    /// Resolves positionally paired name/value indices, skipping pairs that
    /// don't resolve. Unpaired trailing indices are ignored.
    pub fn resolve_pairs(&self, names: &[u32], values: &[u32]) -> Vec<Tag> {
        names
            .iter()
            .zip(values)
            .filter_map(|(&name, &value)| self.resolve_pair(name, value))
            .collect()
    }
}
