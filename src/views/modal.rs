//! Modal Component
//!
//! A centered dialog over a dimmed backdrop.

use gpui::{
    AnyElement, App, ClickEvent, SharedString, Window, div, prelude::*, px,
};
use gpui_component::{ActiveTheme, h_flex, label::Label, v_flex};

use crate::constants::FORM_MODAL_WIDTH;

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    children: Vec<AnyElement>,
    on_close: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Modal {
    /// Create a new modal
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
            on_close: None,
        }
    }

    /// Add a child element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Set the close handler
    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let on_close = self.on_close;
        let theme = cx.theme();

        // Backdrop
        div()
            .id("modal-backdrop")
            .absolute()
            .inset_0()
            .occlude()
            .bg(gpui::rgba(0x00000088))
            .flex()
            .items_center()
            .justify_center()
            .child(
                v_flex()
                    .w(px(FORM_MODAL_WIDTH))
                    .bg(theme.background)
                    .border_1()
                    .border_color(theme.border)
                    .rounded_lg()
                    .shadow_lg()
                    // Header
                    .child(
                        h_flex()
                            .px_6()
                            .py_4()
                            .border_b_1()
                            .border_color(theme.border)
                            .items_center()
                            .justify_between()
                            .child(
                                Label::new(self.title)
                                    .text_size(px(16.0))
                                    .font_weight(gpui::FontWeight::SEMIBOLD),
                            )
                            .child(
                                div()
                                    .id("modal-close")
                                    .size(px(24.0))
                                    .rounded_sm()
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .text_color(theme.muted_foreground)
                                    .cursor_pointer()
                                    .hover(|s| s.bg(theme.muted))
                                    .when_some(on_close, |el, handler| {
                                        el.on_click(move |_event: &ClickEvent, window, cx| {
                                            handler(window, cx);
                                        })
                                    })
                                    .child("×"),
                            ),
                    )
                    // Content
                    .child(
                        v_flex()
                            .px_6()
                            .py_4()
                            .gap_3()
                            .children(self.children),
                    ),
            )
    }
}
