//! Login/signup panel
//!
//! Logo, tagline, tab selector and whichever form the selected tab calls for.
//! The panel state is created here and never leaves this component tree.

use leptos::prelude::*;

use super::login_form::LoginForm;
use super::signup_form::SignupForm;
use super::tab_selector::TabSelector;
use crate::core::{AuthTab, PanelState};

/// Logo shown above the tabs, served from `public/img`
pub const LOGO_PATH: &str = "/img/logo-bus.png";

#[component]
pub fn LoginSignup() -> impl IntoView {
    let state = RwSignal::new(PanelState::new());

    let select_tab = Callback::new(move |tab: AuthTab| state.update(|s| s.select_tab(tab)));
    let toggle_password =
        Callback::new(move |_: ()| state.update(|s| s.toggle_password_visibility()));
    let show_signup = Callback::new(move |_: ()| select_tab.run(AuthTab::Signup));

    let panel: Signal<PanelState> = state.into();

    // Swap forms only when the tab changes, not on every reveal toggle
    let active_tab = Memo::new(move |_| state.get().active_tab);

    view! {
        <div class="login-container">
            <img src=LOGO_PATH alt="Welcome Image" class="welcome-image" />
            <p style="color: black">"Plan your bus trips with ease! "</p>

            <TabSelector state=panel on_select=select_tab />

            {move || match active_tab.get() {
                AuthTab::Login => view! {
                    <LoginForm
                        state=panel
                        on_toggle_password=toggle_password
                        on_signup_click=show_signup
                    />
                }
                .into_any(),
                AuthTab::Signup => view! {
                    <SignupForm state=panel on_toggle_password=toggle_password />
                }
                .into_any(),
            }}
        </div>
    }
}
