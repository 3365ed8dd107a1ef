use leptos::prelude::*;

use crate::core::{AuthTab, PanelState};

/// Login/Signup labels with the sliding indicator underneath
#[component]
pub fn TabSelector(
    #[prop(into)] state: Signal<PanelState>,
    /// Called with the tab whose label was clicked
    #[prop(into)]
    on_select: Callback<AuthTab>,
) -> impl IntoView {
    view! {
        <div class="slider">
            {AuthTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <label
                            for=tab.label_target()
                            class=move || state.get().tab_label_class(tab)
                            on:click=move |_| on_select.run(tab)
                        >
                            {tab.to_string()}
                        </label>
                    }
                })
                .collect_view()}

            <div class=move || state.get().slider_class()></div>
        </div>
    }
}
