//! Rendering of normalized form feedback.
//!
//! Alerts are persistent, form-scoped banners; toasts are transient
//! notifications. Both take their content from `UserMessage` sequences
//! produced by `ActionResult`.

use contracts::shared::forms::UserMessage;
use leptos::prelude::*;

#[component]
pub fn AlertList(messages: Vec<UserMessage>) -> impl IntoView {
    view! {
        <div class="form-alerts">
            {messages.into_iter().map(|m| view! {
                <div class="form-alerts__item">
                    <strong>{m.title}</strong>
                    <span>{m.error}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn ToastList(messages: Vec<UserMessage>) -> impl IntoView {
    view! {
        <div class="toast-stack">
            {messages.into_iter().map(|m| view! {
                <div class="toast-stack__item">
                    <strong>{m.title}</strong>
                    <span>{m.error}</span>
                </div>
            }).collect_view()}
        </div>
    }
}
