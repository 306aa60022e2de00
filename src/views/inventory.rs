//! Inventory View
//!
//! Root dashboard: header, summary cards, search and view toggle, the
//! product list, pagination, and the product form modal when open.
//!
//! Every render re-derives the visible page from the catalog snapshot and
//! the dashboard controls; nothing derived is cached here.

use crate::app::change_view_mode;
use crate::domain::{Product, ProductId};
use crate::states::{
    CatalogState, DashboardState, FormModal, InventoryAppState, InventoryGlobalStore, PageNav,
    ViewMode, i18n_dashboard,
};
use crate::views::{
    EditHandler, InventoryTitleBar, NavigateHandler, Pagination, ProductFormEvent,
    ProductFormView, ProductList, SummaryCards,
};
use gpui::{
    App, Context, Entity, FocusHandle, Focusable, Subscription, Task, Window, div, prelude::*, px,
};
use gpui_component::{
    ActiveTheme, Icon, IconName,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    v_flex,
};
use std::rc::Rc;
use tracing::error;

/// Form entity built for one modal state, plus the subscription listening to it
struct OpenForm {
    modal: FormModal,
    view: Entity<ProductFormView>,
    _subscription: Subscription,
}

/// Root dashboard view
pub struct InventoryView {
    focus_handle: FocusHandle,
    title_bar: Entity<InventoryTitleBar>,
    catalog: Entity<CatalogState>,
    dashboard: Entity<DashboardState>,
    search_state: Entity<InputState>,
    form: Option<OpenForm>,
    /// Pending debounce timer; replacing it cancels the previous one
    search_debounce: Option<Task<()>>,
    _subscriptions: Vec<Subscription>,
}

impl InventoryView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<InventoryGlobalStore>().clone();
        let catalog = store.catalog();
        let dashboard = store.dashboard();
        let app_state = store.app_state();

        let title_bar = cx.new(|cx| InventoryTitleBar::new(window, cx));
        let search_state = cx.new(|cx| {
            let placeholder = i18n_dashboard(cx, "search_placeholder");
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder(placeholder)
        });

        let mut subscriptions = Vec::new();

        subscriptions.push(cx.observe(&catalog, |_this, _model, cx| cx.notify()));
        subscriptions.push(cx.observe_in(
            &dashboard,
            window,
            |this, _model: Entity<DashboardState>, window, cx| {
                this.sync_form(window, cx);
                cx.notify();
            },
        ));

        // Locale changes retranslate the placeholder held by the input
        subscriptions.push(cx.observe_in(
            &app_state,
            window,
            |this, _model: Entity<InventoryAppState>, window, cx| {
                let placeholder = i18n_dashboard(cx, "search_placeholder");
                this.search_state.update(cx, |state, cx| {
                    state.set_placeholder(placeholder, window, cx);
                });
                cx.notify();
            },
        ));

        subscriptions.push(cx.subscribe(&search_state, |this, state, event, cx| {
            if matches!(event, InputEvent::Change) {
                let query = state.read(cx).value().to_string();
                this.on_search_changed(query, cx);
            }
        }));

        let focus_handle = cx.focus_handle();
        focus_handle.focus(window);

        Self {
            focus_handle,
            title_bar,
            catalog,
            dashboard,
            search_state,
            form: None,
            search_debounce: None,
            _subscriptions: subscriptions,
        }
    }

    /// Update the raw query now, the filtering query after the quiet period
    fn on_search_changed(&mut self, query: String, cx: &mut Context<Self>) {
        let dashboard = self.dashboard.clone();
        let (ticket, delay) = dashboard.update(cx, |state, cx| {
            let ticket = state.set_query(query);
            cx.notify();
            (ticket, state.debounce_delay())
        });

        self.search_debounce = Some(cx.spawn(async move |_this, cx| {
            cx.background_executor().timer(delay).await;
            let _ = dashboard.update(cx, |state, cx| {
                if state.settle_query(ticket) {
                    cx.notify();
                }
            });
        }));
    }

    fn open_create(&mut self, cx: &mut Context<Self>) {
        self.dashboard.update(cx, |state, cx| {
            state.open_create();
            cx.notify();
        });
    }

    /// Open the form on a copy of the stored product with `id`
    fn open_edit(&mut self, id: ProductId, cx: &mut Context<Self>) {
        let Some(product) = self.catalog.read(cx).get(id).cloned() else {
            return;
        };
        self.dashboard.update(cx, |state, cx| {
            state.open_edit(product);
            cx.notify();
        });
    }

    fn close_form(&mut self, cx: &mut Context<Self>) {
        self.dashboard.update(cx, |state, cx| {
            state.close_form();
            cx.notify();
        });
    }

    /// Build or drop the form entity to match the dashboard's modal state
    fn sync_form(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let modal = self.dashboard.read(cx).modal().clone();
        if self.form.as_ref().is_some_and(|form| form.modal == modal) {
            return;
        }

        let Some(draft) = modal.draft() else {
            self.form = None;
            return;
        };

        let view = cx.new(|cx| ProductFormView::new(draft, window, cx));
        let subscription = cx.subscribe(&view, |this, _form, event: &ProductFormEvent, cx| {
            match event {
                ProductFormEvent::Saved(submission) => {
                    let submission = submission.clone();
                    this.catalog.update(cx, |catalog, cx| match catalog.save(submission) {
                        Ok(_) => cx.notify(),
                        Err(e) => error!(error = %e, "Failed to save product"),
                    });
                    this.close_form(cx);
                }
                ProductFormEvent::Cancelled => this.close_form(cx),
            }
        });

        self.form = Some(OpenForm {
            modal,
            view,
            _subscription: subscription,
        });
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        h_flex()
            .w_full()
            .items_center()
            .justify_between()
            .child(
                v_flex()
                    .gap_1()
                    .child(
                        Label::new(i18n_dashboard(cx, "brand"))
                            .text_sm()
                            .text_color(cx.theme().muted_foreground),
                    )
                    .child(
                        Label::new(i18n_dashboard(cx, "title"))
                            .text_size(px(28.0))
                            .font_weight(gpui::FontWeight::BOLD),
                    ),
            )
            .child(
                Button::new("add-product")
                    .primary()
                    .label(i18n_dashboard(cx, "add_product"))
                    .on_click(cx.listener(|this, _, _window, cx| this.open_create(cx))),
            )
    }

    fn render_controls(&self, view_mode: ViewMode, cx: &mut Context<Self>) -> impl IntoElement {
        h_flex()
            .w_full()
            .gap_4()
            .items_center()
            .child(
                div().flex_1().child(
                    Input::new(&self.search_state).prefix(Icon::new(IconName::Search)),
                ),
            )
            .child(
                h_flex()
                    .gap_2()
                    .child(Self::view_toggle("view-grid", "grid_view", ViewMode::Grid, view_mode, cx))
                    .child(Self::view_toggle("view-list", "list_view", ViewMode::List, view_mode, cx)),
            )
    }

    fn view_toggle(
        id: &'static str,
        key: &str,
        mode: ViewMode,
        active: ViewMode,
        cx: &App,
    ) -> Button {
        let button = Button::new(id)
            .label(i18n_dashboard(cx, key))
            .on_click(move |_, _window, cx| change_view_mode(mode, cx));
        if mode == active {
            button.primary()
        } else {
            button.outline()
        }
    }
}

impl Focusable for InventoryView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for InventoryView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let snapshot = self.catalog.read(cx).snapshot();

        let dashboard = self.dashboard.read(cx);
        let view_mode = dashboard.view_mode();
        let modal_open = dashboard.modal().is_open();
        let derived = dashboard.derive(&snapshot);
        let page_window = derived.window;

        let entity = cx.entity().downgrade();
        let on_edit: EditHandler = Rc::new(move |product: &Product, _window: &mut Window, cx: &mut App| {
            let id = product.id;
            let _ = entity.update(cx, |this, cx| this.open_edit(id, cx));
        });

        let dashboard = self.dashboard.clone();
        let on_navigate: NavigateHandler = Rc::new(move |nav: PageNav, _window: &mut Window, cx: &mut App| {
            dashboard.update(cx, |state, cx| {
                state.navigate(nav, &page_window);
                cx.notify();
            });
        });

        v_flex()
            .id("inventory-view")
            .track_focus(&self.focus_handle)
            .size_full()
            .relative()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(self.title_bar.clone())
            .child(
                v_flex()
                    .id("inventory-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_6()
                    .gap_6()
                    .child(self.render_header(cx))
                    .child(SummaryCards::new(derived.summary))
                    .child(self.render_controls(view_mode, cx))
                    .child(ProductList::new(derived.visible, view_mode, on_edit))
                    .child(
                        h_flex()
                            .w_full()
                            .justify_center()
                            .child(Pagination::new(page_window, on_navigate)),
                    ),
            )
            .when_some(
                self.form.as_ref().filter(|_| modal_open),
                |el, form| el.child(form.view.clone()),
            )
    }
}
