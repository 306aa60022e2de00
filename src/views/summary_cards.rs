//! Summary Cards
//!
//! Four statistic cards computed over the whole catalog.

use crate::helpers::{format_count, format_price};
use crate::states::{InventorySummary, i18n_dashboard};
use gpui::{App, Rgba, SharedString, Window, div, prelude::*, px, rgb};
use gpui_component::{ActiveTheme, h_flex, label::Label, v_flex};

/// Card accent colors
fn accent(index: usize) -> Rgba {
    match index {
        0 => rgb(0x8b5cf6), // purple
        1 => rgb(0xec4899), // pink
        2 => rgb(0x3b82f6), // blue
        _ => rgb(0x22c55e), // green
    }
}

/// Row of summary statistic cards
#[derive(IntoElement)]
pub struct SummaryCards {
    summary: InventorySummary,
}

impl SummaryCards {
    pub fn new(summary: InventorySummary) -> Self {
        Self { summary }
    }

    fn render_card(index: usize, label: SharedString, value: String, cx: &App) -> impl IntoElement {
        let color = accent(index);

        v_flex()
            .flex_1()
            .min_w(px(180.0))
            .p_4()
            .gap_2()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .border_l_4()
            .bg(cx.theme().background)
            .child(
                Label::new(label)
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(
                div()
                    .text_size(px(26.0))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(color)
                    .child(value),
            )
    }
}

impl RenderOnce for SummaryCards {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let cx: &App = cx;
        let summary = self.summary;
        let cards = [
            ("total_products", format_count(summary.total_products as i64)),
            ("low_stock", format_count(summary.low_stock as i64)),
            ("total_stock", format_count(summary.total_stock)),
            ("total_value", format_price(summary.total_value)),
        ];

        h_flex()
            .w_full()
            .gap_4()
            .flex_wrap()
            .children(
                cards
                    .into_iter()
                    .enumerate()
                    .map(|(i, (key, value))| Self::render_card(i, i18n_dashboard(cx, key), value, cx)),
            )
    }
}
