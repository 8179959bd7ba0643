//! List view state carried in the query string and its pure transitions.
//!
//! Every link a list page renders (tabs, category chips, pager buttons) is
//! the current [`ViewState`] passed through [`reduce`] and serialized back
//! into a query string.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::filter::{ALL_CATEGORIES, FilterCriteria};

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

const fn default_page() -> usize {
    1
}

fn is_all(category: &str) -> bool {
    category == ALL_CATEGORIES
}

/// Separator of ids inside the `cart` query value.
const SELECTION_SEPARATOR: &str = ",";

/// Ids picked from a list, in the order they were added.
///
/// Travels in the query string as one comma-separated value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection(Vec<String>);

impl Selection {
    /// Builds a selection, dropping blank and repeated ids.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::default();
        for id in ids {
            let id = id.as_ref().trim();
            if !id.is_empty() && !selection.contains(id) {
                selection.0.push(id.to_string());
            }
        }
        selection
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|picked| picked == id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Adds `id` when it is missing and removes it otherwise.
    pub fn toggled(&self, id: &str) -> Self {
        let id = id.trim();
        if id.is_empty() {
            return self.clone();
        }
        if self.contains(id) {
            Self(self.0.iter().filter(|picked| *picked != id).cloned().collect())
        } else {
            let mut ids = self.0.clone();
            ids.push(id.to_string());
            Self(ids)
        }
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.join(SELECTION_SEPARATOR))
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(raw.split(SELECTION_SEPARATOR)))
    }
}

/// Tab, category, search term and page of a list view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState<K> {
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub tab: Option<K>,
    #[serde(default = "default_category", skip_serializing_if = "is_all")]
    pub category: String,
    #[serde(default, rename = "q", skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(default = "default_page")]
    pub page: usize,
    /// Ids put in the cart. Survives tab, filter and page changes.
    #[serde(default, skip_serializing_if = "Selection::is_empty")]
    pub cart: Selection,
}

impl<K> Default for ViewState<K> {
    fn default() -> Self {
        Self {
            tab: None,
            category: default_category(),
            search: String::new(),
            page: default_page(),
            cart: Selection::default(),
        }
    }
}

/// User interactions that change a list view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewAction<K> {
    SetTab(K),
    SetCategory(String),
    SetSearch(String),
    SetPage(usize),
    ToggleCart(String),
}

/// Applies `action` to `state`.
///
/// Any change of tab, category or search term lands on page 1. Switching tab
/// also drops the category and search term of the previous tab. The cart is
/// only touched by `ToggleCart`.
pub fn reduce<K>(state: &ViewState<K>, action: ViewAction<K>) -> ViewState<K>
where
    K: Clone + PartialEq,
{
    match action {
        ViewAction::SetTab(tab) => ViewState {
            tab: Some(tab),
            cart: state.cart.clone(),
            ..ViewState::default()
        },
        ViewAction::SetCategory(category) => {
            let category = normalize_category(&category);
            if category == state.category {
                return state.clone();
            }
            ViewState {
                category,
                page: 1,
                ..state.clone()
            }
        }
        ViewAction::SetSearch(search) => {
            let search = search.trim().to_string();
            if search == state.search {
                return state.clone();
            }
            ViewState {
                search,
                page: 1,
                ..state.clone()
            }
        }
        ViewAction::SetPage(page) => ViewState {
            page: page.max(1),
            ..state.clone()
        },
        ViewAction::ToggleCart(id) => ViewState {
            cart: state.cart.toggled(&id),
            ..state.clone()
        },
    }
}

fn normalize_category(category: &str) -> String {
    let category = category.trim();
    if category.is_empty() {
        default_category()
    } else {
        category.to_string()
    }
}

impl<K> ViewState<K>
where
    K: Clone + PartialEq,
{
    pub fn new(tab: K) -> Self {
        Self {
            tab: Some(tab),
            ..Self::default()
        }
    }

    /// Cleans up values as they arrive from a query string.
    pub fn normalized(self, default_tab: Option<K>) -> Self {
        Self {
            tab: self.tab.or(default_tab),
            category: normalize_category(&self.category),
            search: self.search.trim().to_string(),
            page: self.page.max(1),
            cart: self.cart,
        }
    }

    /// Snaps the page back into `[1, total_pages]`.
    pub fn clamp(self, total_pages: usize) -> Self {
        let page = self.page.clamp(1, total_pages.max(1));
        Self { page, ..self }
    }

    pub fn criteria(&self) -> FilterCriteria<K> {
        FilterCriteria {
            kind: self.tab.clone(),
            category: self.category.clone(),
            search: self.search.clone(),
        }
    }

    pub fn apply(&self, action: ViewAction<K>) -> Self {
        reduce(self, action)
    }
}

impl<K: Serialize> ViewState<K> {
    /// Link to `base` carrying this state in the query string.
    pub fn href(&self, base: &str) -> String {
        match serde_html_form::to_string(self) {
            Ok(query) if query.is_empty() => base.to_string(),
            Ok(query) => format!("{base}?{query}"),
            Err(err) => {
                log::error!("Failed to encode view state: {err}");
                base.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    enum Tab {
        Notice,
        Review,
    }

    fn on_page(page: usize) -> ViewState<Tab> {
        ViewState {
            page,
            ..ViewState::new(Tab::Review)
        }
    }

    #[test]
    fn changing_category_resets_page() {
        let state = on_page(3);

        let next = reduce(&state, ViewAction::SetCategory("민법".into()));

        assert_eq!(next.page, 1);
        assert_eq!(next.category, "민법");
        assert_eq!(next.tab, Some(Tab::Review));
    }

    #[test]
    fn changing_search_resets_page() {
        let next = reduce(&on_page(2), ViewAction::SetSearch("  합격 ".into()));

        assert_eq!(next.page, 1);
        assert_eq!(next.search, "합격");
    }

    #[test]
    fn unchanged_filter_keeps_page() {
        let state = on_page(2);
        assert_eq!(
            reduce(&state, ViewAction::SetCategory(ALL_CATEGORIES.into())),
            state
        );
        assert_eq!(reduce(&state, ViewAction::SetSearch(String::new())), state);
    }

    #[test]
    fn switching_tab_starts_fresh() {
        let state = ViewState {
            category: "민법".into(),
            search: "후기".into(),
            ..on_page(4)
        };

        let next = reduce(&state, ViewAction::SetTab(Tab::Notice));

        assert_eq!(next, ViewState::new(Tab::Notice));
    }

    #[test]
    fn set_page_never_goes_below_one() {
        assert_eq!(reduce(&on_page(2), ViewAction::SetPage(0)).page, 1);
        assert_eq!(reduce(&on_page(2), ViewAction::SetPage(7)).page, 7);
    }

    #[test]
    fn clamp_snaps_into_range() {
        assert_eq!(on_page(3).clamp(1).page, 1);
        assert_eq!(on_page(3).clamp(0).page, 1);
        assert_eq!(on_page(3).clamp(5).page, 3);
    }

    #[test]
    fn normalized_fills_defaults() {
        let raw = ViewState::<Tab> {
            tab: None,
            category: "  ".into(),
            search: " q ".into(),
            page: 0,
            cart: Selection::default(),
        };

        let state = raw.normalized(Some(Tab::Notice));

        assert_eq!(state.tab, Some(Tab::Notice));
        assert_eq!(state.category, ALL_CATEGORIES);
        assert_eq!(state.search, "q");
        assert_eq!(state.page, 1);
    }

    #[test]
    fn href_skips_default_values() {
        assert_eq!(
            ViewState::new(Tab::Review).href("/community"),
            "/community?tab=review&page=1"
        );

        let state = ViewState {
            category: "민법".into(),
            search: "합격".into(),
            ..on_page(2)
        };
        let href = state.href("/community");
        let parsed: ViewState<Tab> =
            serde_html_form::from_str(href.trim_start_matches("/community?")).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn query_string_defaults() {
        let state: ViewState<Tab> = serde_html_form::from_str("").unwrap();
        assert_eq!(state, ViewState::default());

        let state: ViewState<Tab> = serde_html_form::from_str("tab=notice&page=2").unwrap();
        assert_eq!(state.tab, Some(Tab::Notice));
        assert_eq!(state.page, 2);
    }

    #[test]
    fn toggle_cart_adds_then_removes() {
        let state = on_page(2);

        let added = reduce(&state, ViewAction::ToggleCart("s1".into()));
        assert!(added.cart.contains("s1"));
        assert_eq!(added.page, 2);

        let removed = reduce(&added, ViewAction::ToggleCart("s1".into()));
        assert!(removed.cart.is_empty());
        assert_eq!(removed, state);
    }

    #[test]
    fn cart_survives_tab_and_filter_changes() {
        let state = reduce(&on_page(1), ViewAction::ToggleCart("p1".into()));

        let next = reduce(&state, ViewAction::SetTab(Tab::Notice));
        let next = reduce(&next, ViewAction::SetCategory("민법".into()));

        assert!(next.cart.contains("p1"));
    }

    #[test]
    fn cart_travels_in_query_string() {
        let state = reduce(&on_page(1), ViewAction::ToggleCart("s1".into()));
        let state = reduce(&state, ViewAction::ToggleCart("p2".into()));

        let href = state.href("/courses");
        let parsed: ViewState<Tab> =
            serde_html_form::from_str(href.trim_start_matches("/courses?")).unwrap();

        assert_eq!(parsed.cart.iter().collect::<Vec<_>>(), vec!["s1", "p2"]);
    }

    #[test]
    fn selection_drops_blank_and_repeated_ids() {
        let selection = Selection::new(["s1", " ", "s1", "p1 "]);

        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["s1", "p1"]);
        assert_eq!(selection.toggled("  "), selection);
    }
}
