//! Application constants

// Alert texts
pub const CONNECT_SUCCESS: &str = "Wallet Connected Successfully!";
pub const PROVIDER_UNAVAILABLE: &str = "Please install MetaMask to use this feature.";
pub const MISSING_AMOUNT: &str = "Please enter an ETH amount.";
pub const BALANCE_FAILED: &str = "Failed to get balance. Check console for details.";

// Connect button labels
pub const LABEL_CONNECT: &str = "Connect";
pub const LABEL_CONNECTING: &str = "Connecting...";
pub const LABEL_CONNECTED: &str = "Connected";
pub const LABEL_INSTALL_WALLET: &str = "Please install MetaMask";

// DOM ids
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";
pub const PLEXUS_CANVAS_ID: &str = "plexus-bg";
