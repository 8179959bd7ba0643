//! DTO modules that bridge services with templates and APIs.

use serde::Serialize;

use crate::pagination::{NavAction, PageState};
use crate::view_state::{ViewAction, ViewState};

pub mod api;
pub mod community;
pub mod courses;
pub mod event;

/// Tab header entry.
#[derive(Debug, Serialize)]
pub struct TabLink {
    pub value: &'static str,
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// Category chip of a filter bar.
#[derive(Debug, Serialize)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
    pub href: String,
    pub selected: bool,
}

/// Numeric cell or ellipsis of the pager.
#[derive(Debug, Serialize)]
pub struct PagerLink {
    /// `None` for an ellipsis.
    pub page: Option<usize>,
    pub href: Option<String>,
    pub active: bool,
}

/// First/prev/next/last button.
#[derive(Debug, Serialize)]
pub struct NavLink {
    pub action: &'static str,
    pub href: String,
    pub disabled: bool,
}

/// Everything a template needs to draw the page selector.
#[derive(Debug, Serialize)]
pub struct Pager {
    /// The original list hides the pager for an empty collection.
    pub visible: bool,
    pub links: Vec<PagerLink>,
    pub nav: Vec<NavLink>,
}

impl Pager {
    /// Builds pager links by feeding page changes through the view reducer.
    pub fn new<K>(state: &ViewState<K>, page: &PageState, base: &str) -> Self
    where
        K: Clone + PartialEq + Serialize,
    {
        let href_for = |target: usize| state.apply(ViewAction::SetPage(target)).href(base);

        let links = page
            .labels()
            .into_iter()
            .map(|label| match label.page() {
                Some(number) => PagerLink {
                    page: Some(number),
                    href: Some(href_for(number)),
                    active: number == page.current_page,
                },
                None => PagerLink {
                    page: None,
                    href: None,
                    active: false,
                },
            })
            .collect();

        let nav = NavAction::ALL
            .into_iter()
            .map(|action| NavLink {
                action: action.as_str(),
                href: href_for(page.navigate(action)),
                disabled: page.is_disabled(action),
            })
            .collect();

        Self {
            visible: page.total_items > 0,
            links,
            nav,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pager_links_follow_labels() {
        let state: ViewState<()> = ViewState {
            page: 5,
            ..ViewState::default()
        };
        let page = PageState::new(5, 5, 50).unwrap();

        let pager = Pager::new(&state, &page, "/event");

        let pages: Vec<Option<usize>> = pager.links.iter().map(|link| link.page).collect();
        assert_eq!(
            pages,
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
        assert!(pager.links[3].active);
        assert_eq!(pager.links[0].href.as_deref(), Some("/event?page=1"));
        assert!(pager.links[1].href.is_none());
        assert!(pager.visible);
    }

    #[test]
    fn pager_nav_is_disabled_at_edges() {
        let state: ViewState<()> = ViewState::default();
        let page = PageState::new(1, 5, 3).unwrap();

        let pager = Pager::new(&state, &page, "/event");

        assert!(pager.nav.iter().all(|link| link.disabled));
        assert!(pager.nav.iter().all(|link| link.href == "/event?page=1"));
    }

    #[test]
    fn pager_hidden_for_empty_list() {
        let state: ViewState<()> = ViewState::default();
        let page = PageState::new(1, 5, 0).unwrap();

        assert!(!Pager::new(&state, &page, "/event").visible);
    }
}
