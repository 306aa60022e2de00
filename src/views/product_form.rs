//! Product Form View
//!
//! Modal editor for a single product. Input changes only touch the local
//! draft; the parent hears about the product through `ProductFormEvent`
//! once a submit passes validation.

use crate::states::{FormErrors, FormField, ProductDraft, ProductSubmission, i18n_form};
use crate::views::Modal;
use gpui::{Context, Entity, EventEmitter, Subscription, Window, div, prelude::*};
use gpui_component::{
    ActiveTheme,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    v_flex,
};

/// Outcome of the form, emitted to the view that opened it
#[derive(Debug, Clone)]
pub enum ProductFormEvent {
    /// The draft passed validation
    Saved(ProductSubmission),
    /// Closed without saving
    Cancelled,
}

/// Product form modal
pub struct ProductFormView {
    /// Staged edits, never shared with the catalog
    draft: ProductDraft,
    /// One input per editable field, in display order
    inputs: Vec<(FormField, Entity<InputState>)>,
    /// Errors from the last submit
    errors: FormErrors,
    /// Subscriptions
    _subscriptions: Vec<Subscription>,
}

impl EventEmitter<ProductFormEvent> for ProductFormView {}

impl ProductFormView {
    /// Create a form staging `draft`
    pub fn new(draft: ProductDraft, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let mut inputs = Vec::with_capacity(FormField::ALL.len());
        let mut subscriptions = Vec::with_capacity(FormField::ALL.len());

        for field in FormField::ALL {
            let value = draft.value(field).to_string();
            let input = cx.new(|cx| {
                let state = InputState::new(window, cx);
                let state = if field.is_multi_line() {
                    state.multi_line(true).rows(3)
                } else {
                    state
                };
                state.default_value(value)
            });

            subscriptions.push(cx.subscribe(&input, move |this, state, event, cx| {
                match event {
                    InputEvent::Change => {
                        let value = state.read(cx).value().to_string();
                        this.draft.set(field, value);
                    }
                    InputEvent::PressEnter { .. } if !field.is_multi_line() => this.submit(cx),
                    _ => {}
                }
            }));

            inputs.push((field, input));
        }

        if let Some((_, first)) = inputs.first() {
            first.update(cx, |state, cx| state.focus(window, cx));
        }

        Self {
            draft,
            inputs,
            errors: FormErrors::default(),
            _subscriptions: subscriptions,
        }
    }

    /// Validate the draft and hand it to the parent on success
    fn submit(&mut self, cx: &mut Context<Self>) {
        match self.draft.submit() {
            Ok(submission) => {
                self.errors = FormErrors::default();
                cx.emit(ProductFormEvent::Saved(submission));
            }
            Err(errors) => {
                tracing::debug!(count = errors.len(), "Product form rejected");
                self.errors = errors;
            }
        }
        cx.notify();
    }

    fn cancel(&mut self, cx: &mut Context<Self>) {
        cx.emit(ProductFormEvent::Cancelled);
    }

    fn render_field(
        &self,
        field: FormField,
        input: &Entity<InputState>,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let mut label = i18n_form(cx, field.key()).to_string();
        if field.is_marked_required() {
            label.push_str(" *");
        }

        v_flex()
            .gap_1()
            .child(Label::new(label).text_sm())
            .child(Input::new(input))
            .when_some(self.errors.get(field), |el, error| {
                el.child(
                    div()
                        .text_xs()
                        .text_color(cx.theme().danger)
                        .child(i18n_form(cx, error.key())),
                )
            })
    }
}

impl Render for ProductFormView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let title = if self.draft.is_edit() {
            i18n_form(cx, "edit_title")
        } else {
            i18n_form(cx, "add_title")
        };

        let fields: Vec<_> = self
            .inputs
            .iter()
            .map(|(field, input)| self.render_field(*field, input, cx).into_any_element())
            .collect();

        let actions = h_flex()
            .pt_2()
            .gap_2()
            .justify_end()
            .child(
                Button::new("form-cancel")
                    .ghost()
                    .label(i18n_form(cx, "cancel"))
                    .on_click(cx.listener(|this, _, _, cx| this.cancel(cx))),
            )
            .child(
                Button::new("form-save")
                    .primary()
                    .label(i18n_form(cx, "save"))
                    .on_click(cx.listener(|this, _, _, cx| this.submit(cx))),
            );

        let entity = cx.entity();
        fields
            .into_iter()
            .fold(Modal::new(title), |modal, field| modal.child(field))
            .child(actions)
            .on_close(move |_window, cx| {
                entity.update(cx, |this, cx| this.cancel(cx));
            })
    }
}
