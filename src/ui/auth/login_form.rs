//! Login form
//!
//! Plain HTML form without a submit handler; the browser's `required` check
//! is the only thing standing between the button and a default submission.

use leptos::prelude::*;

use super::password_field::PasswordField;
use crate::core::PanelState;

#[component]
pub fn LoginForm(
    #[prop(into)] state: Signal<PanelState>,
    /// Called when the password reveal toggle is clicked
    #[prop(into)]
    on_toggle_password: Callback<()>,
    /// Called when "Signup now" is clicked
    #[prop(into)]
    on_signup_click: Callback<()>,
) -> impl IntoView {
    view! {
        <form>
            <div class="form-group">
                <label for="loginEmail"></label>
                <input
                    type="text"
                    class="form-control"
                    id="loginEmail"
                    placeholder="Email Address"
                    required=true
                />
            </div>
            <div class="form-group">
                <label for="loginPassword"></label>
                <PasswordField id="loginPassword" state=state on_toggle=on_toggle_password />
            </div>

            // No handler behind this link yet
            <a href="#">"Forgot password?"</a>

            <button type="submit" class="btn btn-primary btn-block mt-3">
                "Login"
            </button>

            <p class="text-center mt-3">
                "Not a member? "
                <a
                    href="#signup-tab"
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_signup_click.run(());
                    }
                >
                    "Signup now"
                </a>
            </p>
        </form>
    }
}
