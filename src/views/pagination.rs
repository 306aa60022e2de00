//! Pagination Component
//!
//! First / Prev / "Page X of Y" / Next / Last controls for the product list.

use crate::states::{PageNav, PageWindow, i18n_dashboard, i18n_page_of};
use gpui::{App, Window, prelude::*};
use gpui_component::{Disableable, Sizable, button::Button, h_flex, label::Label};
use std::rc::Rc;

/// Callback invoked with the requested navigation
pub type NavigateHandler = Rc<dyn Fn(PageNav, &mut Window, &mut App) + 'static>;

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    window: PageWindow,
    on_navigate: NavigateHandler,
}

impl Pagination {
    /// Create a new pagination component
    pub fn new(window: PageWindow, on_navigate: NavigateHandler) -> Self {
        Self {
            window,
            on_navigate,
        }
    }

    fn nav_button(&self, nav: PageNav, cx: &App) -> Button {
        let (id, key) = match nav {
            PageNav::First => ("page-first", "first"),
            PageNav::Prev => ("page-prev", "prev"),
            PageNav::Next => ("page-next", "next"),
            PageNav::Last => ("page-last", "last"),
        };
        let on_navigate = self.on_navigate.clone();

        Button::new(id)
            .small()
            .label(i18n_dashboard(cx, key))
            .disabled(!self.window.is_enabled(nav))
            .on_click(move |_, window, cx| on_navigate(nav, window, cx))
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let cx: &App = cx;

        h_flex()
            .w_full()
            .py_2()
            .gap_2()
            .items_center()
            .justify_center()
            .child(self.nav_button(PageNav::First, cx))
            .child(self.nav_button(PageNav::Prev, cx))
            .child(
                Label::new(i18n_page_of(cx, self.window.page, self.window.page_count))
                    .text_sm()
                    .px_2(),
            )
            .child(self.nav_button(PageNav::Next, cx))
            .child(self.nav_button(PageNav::Last, cx))
    }
}
