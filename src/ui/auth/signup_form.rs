use leptos::prelude::*;

use super::password_field::PasswordField;
use crate::core::PanelState;

/// Signup form: full name, email, mobile number and password, all required.
/// Submitting does nothing beyond the browser default.
#[component]
pub fn SignupForm(
    #[prop(into)] state: Signal<PanelState>,
    #[prop(into)] on_toggle_password: Callback<()>,
) -> impl IntoView {
    view! {
        <form>
            <div class="form-group">
                <label for="fullName"></label>
                <input
                    type="text"
                    class="form-control"
                    id="fullName"
                    placeholder="Full Name"
                    required=true
                />
            </div>
            <div class="form-group">
                <label for="signupEmail"></label>
                <input
                    type="email"
                    class="form-control"
                    id="signupEmail"
                    placeholder="Email Address"
                    required=true
                />
            </div>
            <div class="form-group">
                <label for="mobileNumber"></label>
                <input
                    type="text"
                    class="form-control"
                    id="mobileNumber"
                    placeholder="Mobile Number"
                    required=true
                />
            </div>
            <div class="form-group">
                <label for="signupPassword"></label>
                <PasswordField id="signupPassword" state=state on_toggle=on_toggle_password />
            </div>

            <button type="submit" class="btn btn-primary btn-block mt-3">
                "Signup"
            </button>
        </form>
    }
}
