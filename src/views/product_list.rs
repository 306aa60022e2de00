//! Product List
//!
//! Renders the visible page of products either as a card grid or as a
//! table. Both layouts expose the same fields and an Edit action per item.

use crate::constants::PRODUCT_CARD_WIDTH;
use crate::domain::Product;
use crate::helpers::format_price;
use crate::states::{ViewMode, i18n_dashboard};
use gpui::{AnyElement, App, SharedString, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Sizable,
    button::Button,
    h_flex,
    label::Label,
    v_flex,
};
use std::rc::Rc;

/// Callback invoked with the product whose Edit action was clicked
pub type EditHandler = Rc<dyn Fn(&Product, &mut Window, &mut App) + 'static>;

/// Column widths for list mode
const COL_PRICE_WIDTH: f32 = 120.0;
const COL_CATEGORY_WIDTH: f32 = 160.0;
const COL_STOCK_WIDTH: f32 = 100.0;
const COL_ACTIONS_WIDTH: f32 = 100.0;
const ROW_HEIGHT: f32 = 40.0;

/// Visible products in the active view mode
#[derive(IntoElement)]
pub struct ProductList {
    products: Vec<Product>,
    view_mode: ViewMode,
    on_edit: EditHandler,
}

impl ProductList {
    pub fn new(products: Vec<Product>, view_mode: ViewMode, on_edit: EditHandler) -> Self {
        Self {
            products,
            view_mode,
            on_edit,
        }
    }

    fn edit_button(product: &Product, label: SharedString, on_edit: &EditHandler) -> Button {
        let on_edit = on_edit.clone();
        let product = product.clone();
        Button::new(("edit-product", product.id as usize))
            .small()
            .label(label)
            .on_click(move |_, window, cx| on_edit(&product, window, cx))
    }

    fn render_card(product: &Product, on_edit: &EditHandler, cx: &App) -> AnyElement {
        let theme = cx.theme();

        v_flex()
            .w(px(PRODUCT_CARD_WIDTH))
            .p_4()
            .gap_2()
            .rounded_lg()
            .border_1()
            .border_color(theme.border)
            .bg(theme.background)
            .child(
                div()
                    .px_2()
                    .py_px()
                    .rounded_sm()
                    .bg(theme.accent)
                    .text_xs()
                    .text_color(theme.accent_foreground)
                    .child(product.category.clone()),
            )
            .child(
                Label::new(product.name.clone())
                    .text_size(px(16.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD),
            )
            .child(
                div()
                    .h(px(40.0))
                    .overflow_hidden()
                    .text_sm()
                    .text_color(theme.muted_foreground)
                    .child(product.description.clone()),
            )
            .child(
                h_flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::BOLD)
                            .child(format_price(product.price)),
                    )
                    .child(
                        div()
                            .px_2()
                            .py_px()
                            .rounded_sm()
                            .bg(theme.muted)
                            .text_xs()
                            .child(format!("{} {}", product.stock, i18n_dashboard(cx, "units"))),
                    ),
            )
            .child(Self::edit_button(product, i18n_dashboard(cx, "edit"), on_edit))
            .into_any_element()
    }

    fn render_grid(&self, cx: &App) -> AnyElement {
        h_flex()
            .w_full()
            .flex_wrap()
            .items_start()
            .gap_4()
            .children(
                self.products
                    .iter()
                    .map(|product| Self::render_card(product, &self.on_edit, cx)),
            )
            .into_any_element()
    }

    fn render_table_header(cx: &App) -> impl IntoElement {
        let cell = |key: &str| Label::new(i18n_dashboard(cx, key)).text_sm();

        h_flex()
            .h(px(ROW_HEIGHT))
            .w_full()
            .px_3()
            .items_center()
            .bg(cx.theme().muted)
            .border_b_1()
            .border_color(cx.theme().border)
            .font_weight(gpui::FontWeight::MEDIUM)
            .child(div().flex_1().child(cell("col_name")))
            .child(div().w(px(COL_PRICE_WIDTH)).child(cell("col_price")))
            .child(div().w(px(COL_CATEGORY_WIDTH)).child(cell("col_category")))
            .child(div().w(px(COL_STOCK_WIDTH)).child(cell("col_stock")))
            .child(div().w(px(COL_ACTIONS_WIDTH)).child(cell("col_actions")))
    }

    fn render_table_row(index: usize, product: &Product, on_edit: &EditHandler, cx: &App) -> AnyElement {
        let theme = cx.theme();
        let bg = if index % 2 == 0 {
            theme.background
        } else {
            theme.muted.opacity(0.4)
        };

        h_flex()
            .h(px(ROW_HEIGHT))
            .w_full()
            .px_3()
            .items_center()
            .bg(bg)
            .border_b_1()
            .border_color(theme.border)
            .text_sm()
            .child(div().flex_1().overflow_hidden().child(product.name.clone()))
            .child(div().w(px(COL_PRICE_WIDTH)).child(format_price(product.price)))
            .child(div().w(px(COL_CATEGORY_WIDTH)).child(product.category.clone()))
            .child(div().w(px(COL_STOCK_WIDTH)).child(product.stock.to_string()))
            .child(
                div()
                    .w(px(COL_ACTIONS_WIDTH))
                    .child(Self::edit_button(product, i18n_dashboard(cx, "edit"), on_edit)),
            )
            .into_any_element()
    }

    fn render_table(&self, cx: &App) -> AnyElement {
        v_flex()
            .w_full()
            .border_1()
            .border_color(cx.theme().border)
            .rounded_md()
            .overflow_hidden()
            .child(Self::render_table_header(cx))
            .children(
                self.products
                    .iter()
                    .enumerate()
                    .map(|(i, product)| Self::render_table_row(i, product, &self.on_edit, cx)),
            )
            .into_any_element()
    }

    fn render_empty(cx: &App) -> AnyElement {
        div()
            .w_full()
            .py_12()
            .flex()
            .items_center()
            .justify_center()
            .text_color(cx.theme().muted_foreground)
            .child(i18n_dashboard(cx, "no_products"))
            .into_any_element()
    }
}

impl RenderOnce for ProductList {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let cx: &App = cx;

        if self.products.is_empty() {
            return Self::render_empty(cx);
        }

        match self.view_mode {
            ViewMode::Grid => self.render_grid(cx),
            ViewMode::List => self.render_table(cx),
        }
    }
}
