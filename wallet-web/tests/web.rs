#![cfg(target_arch = "wasm32")]

use coffee_web::plexus::{Plexus, LAYERS};
use coffee_web::services::provider::js_error_message;
use coffee_web::services::{notice_for, perform, InjectedProvider, WalletAction, WalletError};
use coffee_web::utils::constants::PROVIDER_UNAVAILABLE;
use shared::dto::contract::Contract;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn js_error_message_reads_strings_and_errors() {
    assert_eq!(js_error_message(&JsValue::from_str("User rejected the request.")), "User rejected the request.");

    let error = js_sys::Error::new("execution reverted: not owner");
    assert_eq!(js_error_message(&error.into()), "execution reverted: not owner");

    let rpc_error = js_sys::Object::new();
    js_sys::Reflect::set(&rpc_error, &"code".into(), &JsValue::from(4001)).unwrap();
    js_sys::Reflect::set(&rpc_error, &"message".into(), &"denied".into()).unwrap();
    assert_eq!(js_error_message(&rpc_error.into()), "denied");
}

#[wasm_bindgen_test]
fn no_wallet_extension_in_test_browser() {
    assert!(InjectedProvider::detect().is_none());
}

#[wasm_bindgen_test]
async fn connect_without_provider_reports_unavailable() {
    let contract = Contract::coffee().unwrap();
    let result = perform(WalletAction::Connect, None::<&InjectedProvider>, &contract, "").await;

    assert!(matches!(result, Err(WalletError::ProviderUnavailable)));
    assert_eq!(notice_for(WalletAction::Connect, &result).as_deref(), Some(PROVIDER_UNAVAILABLE));
}

#[wasm_bindgen_test]
async fn fund_rejects_empty_amount_before_provider_lookup() {
    let contract = Contract::coffee().unwrap();
    let result = perform(WalletAction::Fund, None::<&InjectedProvider>, &contract, "  ").await;
    assert!(matches!(result, Err(WalletError::MissingAmount)));
}

#[wasm_bindgen_test]
fn plexus_runs_on_js_random() {
    let mut plexus = Plexus::new(800.0, 600.0, &LAYERS, js_sys::Math::random);
    for _ in 0..60 {
        plexus.step();
    }
    for layer in plexus.layers() {
        for p in &layer.particles {
            assert!((0.0..800.0).contains(&p.x) && (0.0..600.0).contains(&p.y));
        }
    }
    assert_eq!(plexus.frame().layers.len(), LAYERS.len());
}
