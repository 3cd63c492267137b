//! Style declarations and the ordered set frames keep them in.

use crate::property::AnimatableProperty;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::hash::{Hash, Hasher};
use indexmap::IndexSet;
use indexmap::set::{IntoIter, Iter};

/// One `property: value` declaration.
///
/// Equality and hashing are structural; the value text is not normalised.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InlineStyle {
    pub property: AnimatableProperty,
    pub value: String,
}

impl InlineStyle {
    #[inline]
    pub fn new(property: AnimatableProperty, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

impl Display for InlineStyle {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write!(formatter, "{}: {}", self.property, self.value)
    }
}

/// Insertion-ordered declarations with exact repeats suppressed.
///
/// Re-inserting a declaration that is already present keeps it at its
/// original position. Two sets are equal only if they hold the same
/// declarations in the same order.
#[derive(Debug, Clone, Default)]
pub struct StyleSet {
    styles: IndexSet<InlineStyle>,
}

impl StyleSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration. Returns `false` if an equal one was already present.
    #[inline]
    pub fn insert(&mut self, style: InlineStyle) -> bool {
        self.styles.insert(style)
    }

    #[inline]
    pub fn contains(&self, style: &InlineStyle) -> bool {
        self.styles.contains(style)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&InlineStyle> {
        self.styles.get_index(index)
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, InlineStyle> {
        self.styles.iter()
    }
}

impl PartialEq for StyleSet {
    fn eq(&self, other: &Self) -> bool {
        self.styles.iter().eq(other.styles.iter())
    }
}

impl Eq for StyleSet {}

impl Hash for StyleSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.styles.len().hash(state);
        for style in &self.styles {
            style.hash(state);
        }
    }
}

impl FromIterator<InlineStyle> for StyleSet {
    fn from_iter<I: IntoIterator<Item = InlineStyle>>(iter: I) -> Self {
        Self {
            styles: iter.into_iter().collect(),
        }
    }
}

impl Extend<InlineStyle> for StyleSet {
    fn extend<I: IntoIterator<Item = InlineStyle>>(&mut self, iter: I) {
        self.styles.extend(iter);
    }
}

impl IntoIterator for StyleSet {
    type Item = InlineStyle;
    type IntoIter = IntoIter<InlineStyle>;

    fn into_iter(self) -> Self::IntoIter {
        self.styles.into_iter()
    }
}

impl<'set> IntoIterator for &'set StyleSet {
    type Item = &'set InlineStyle;
    type IntoIter = Iter<'set, InlineStyle>;

    fn into_iter(self) -> Self::IntoIter {
        self.styles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opacity(value: &str) -> InlineStyle {
        InlineStyle::new(AnimatableProperty::Opacity, value)
    }

    #[test]
    fn repeats_keep_first_position() {
        let mut set = StyleSet::new();
        assert!(set.insert(opacity("0")));
        assert!(set.insert(opacity("1")));
        assert!(!set.insert(opacity("0")));
        let values: Vec<&str> = set.iter().map(|style| style.value.as_str()).collect();
        assert_eq!(values, ["0", "1"]);
    }

    #[test]
    fn same_property_different_values_both_kept() {
        let set: StyleSet = [opacity("0"), opacity("0.5")].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let forward: StyleSet = [opacity("0"), opacity("1")].into_iter().collect();
        let backward: StyleSet = [opacity("1"), opacity("0")].into_iter().collect();
        assert_ne!(forward, backward);
        assert_eq!(forward, forward.clone());
    }

    #[test]
    fn declaration_text() {
        assert_eq!(opacity("0.5").to_string(), "opacity: 0.5");
    }
}
