use leptos::prelude::*;

use crate::core::{PanelState, RevealIcon};
use crate::ui::icon::{Icon, icons};

/// Password input paired with its reveal toggle.
///
/// Every password field on the panel reads the same `show_password` flag.
#[component]
pub fn PasswordField(
    /// `id` of the input, referenced by the label in front of it
    id: &'static str,
    #[prop(default = "Password")]
    placeholder: &'static str,
    /// Panel state; only `show_password` is read here
    #[prop(into)]
    state: Signal<PanelState>,
    /// Called when the reveal toggle is clicked
    #[prop(into)]
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="password-input">
            <input
                type=move || state.get().password_input_type()
                class="form-control"
                id=id
                placeholder=placeholder
                required=true
            />
            // type="button" keeps the toggle from submitting the form
            <button
                type="button"
                class="password-toggle"
                on:click=move |_| on_toggle.run(())
            >
                {move || {
                    let name = match state.get().reveal_icon() {
                        RevealIcon::Eye => icons::EYE,
                        RevealIcon::EyeSlash => icons::EYE_SLASH,
                    };
                    view! { <Icon name=name class="reveal-icon" /> }
                }}
            </button>
        </div>
    }
}
