pub const CONTRACT_NAME: &str = "crates.io:escrow-usage-limiter";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
