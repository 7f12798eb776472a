//! Fund Page - connect, fund, withdraw and balance controls

use leptos::prelude::*;
use shared::dto::contract::Contract;

use crate::services::{notice_for, perform, InjectedProvider, WalletAction, WalletError};
use crate::state::wallet::use_wallet_context;

#[component]
pub fn FundPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let (amount, set_amount) = signal(String::new());

    // One independent attempt per click
    let run = move |action: WalletAction| {
        wallet_ctx.begin(action);
        let amount = amount.get_untracked();

        leptos::task::spawn_local(async move {
            let provider = InjectedProvider::detect();
            let result = match Contract::coffee() {
                Ok(contract) => perform(action, provider.as_ref(), &contract, &amount).await,
                Err(e) => Err(WalletError::from(e)),
            };

            if let Err(e) = &result {
                log::error!("[WALLET] {} failed: {}", action.name(), e);
            }
            wallet_ctx.apply(action, &result);

            if let Some(notice) = notice_for(action, &result) {
                alert(&notice);
            }
        });
    };

    view! {
        <div class="fund-container">
            <div class="card fund-card">
                <h1 class="card-title">"Buy Me a Coffee"</h1>

                <button
                    id="connectButton"
                    class="btn"
                    class:btn-connected=move || wallet_ctx.is_connected()
                    on:click=move |_| run(WalletAction::Connect)
                >
                    {move || wallet_ctx.button_label()}
                </button>

                <div class="fund-row">
                    <label for="ethAmount">"ETH Amount"</label>
                    <input
                        id="ethAmount"
                        type="number"
                        step="any"
                        min="0"
                        placeholder="0.1"
                        prop:value=amount
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                    />
                    <button id="fundButton" class="btn" on:click=move |_| run(WalletAction::Fund)>
                        "Fund"
                    </button>
                </div>

                <div class="fund-row">
                    <button id="balanceButton" class="btn btn-secondary" on:click=move |_| run(WalletAction::Balance)>
                        "Get Balance"
                    </button>
                    <button id="withdrawButton" class="btn btn-secondary" on:click=move |_| run(WalletAction::Withdraw)>
                        "Withdraw"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn alert(message: &str) {
    let shown = web_sys::window().map(|window| window.alert_with_message(message));
    if !matches!(shown, Some(Ok(()))) {
        log::warn!("[WALLET] Could not show alert: {}", message);
    }
}
