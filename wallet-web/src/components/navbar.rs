//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use shared::truncate_address;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let account = move || wallet_ctx.address().map(|address| truncate_address(&address));

    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">
                        <span class="coffee-brown">"Coffee"</span><span class="fund-white">"Fund"</span>
                    </span>
                </A>
                <Show when=move || account().is_some()>
                    <span class="nav-account">{move || account().unwrap_or_default()}</span>
                </Show>
            </div>
        </nav>
    }
}
