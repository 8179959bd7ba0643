//! Narrowing of in-memory collections before they are paginated.

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Fields the filter pipeline inspects on a list item.
pub trait Filterable {
    /// Discriminant partitioning a shared collection into independent views.
    type Kind: PartialEq;

    fn kind(&self) -> Self::Kind;

    fn category(&self) -> Option<&str>;

    /// Fields matched against the free-text search term.
    fn searchable_text(&self) -> Vec<&str>;
}

/// Active view partition, category and search term.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria<K> {
    pub kind: Option<K>,
    pub category: String,
    pub search: String,
}

impl<K> Default for FilterCriteria<K> {
    fn default() -> Self {
        Self {
            kind: None,
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
        }
    }
}

impl<K: PartialEq> FilterCriteria<K> {
    pub fn new(kind: K) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Returns `true` when `item` belongs to the filtered view.
    ///
    /// Search is a case-sensitive substring match; an empty term matches
    /// everything.
    pub fn matches<T>(&self, item: &T) -> bool
    where
        T: Filterable<Kind = K>,
    {
        if let Some(kind) = &self.kind
            && item.kind() != *kind
        {
            return false;
        }

        if self.category != ALL_CATEGORIES && item.category() != Some(self.category.as_str()) {
            return false;
        }

        self.search.is_empty()
            || item
                .searchable_text()
                .iter()
                .any(|text| text.contains(self.search.as_str()))
    }

    /// Borrowing variant of [`filter_items`].
    pub fn apply<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Filterable<Kind = K>,
    {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

/// Returns the items matching `criteria`, preserving their relative order.
pub fn filter_items<T, K>(items: Vec<T>, criteria: &FilterCriteria<K>) -> Vec<T>
where
    T: Filterable<Kind = K>,
    K: PartialEq,
{
    items
        .into_iter()
        .filter(|item| criteria.matches(item))
        .collect()
}
