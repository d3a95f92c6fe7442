//! LCD endpoint construction.

use huahua_types::Direction;

/// Public LCD endpoint used when no node is configured.
pub const DEFAULT_NODE: &str = "https://api.chihuahua.wtf";

/// Path of the transaction search endpoint.
pub const TXS_PATH: &str = "/cosmos/tx/v1beta1/txs";

/// Joins a node base URL and an endpoint path.
///
/// # Example
///
/// ```
/// use huahua_fetch::url::endpoint;
///
/// assert_eq!(
///     endpoint("https://lcd.example.com/", "/cosmos/tx/v1beta1/txs"),
///     "https://lcd.example.com/cosmos/tx/v1beta1/txs"
/// );
/// ```
#[must_use]
pub fn endpoint(node: &str, path: &str) -> String {
    format!("{}{}", node.trim_end_matches('/'), path)
}

/// Path of a single transaction.
#[must_use]
pub fn tx_path(txhash: &str) -> String {
    format!("{TXS_PATH}/{}", txhash.to_uppercase())
}

/// Path of an account record.
#[must_use]
pub fn account_path(address: &str) -> String {
    format!("/cosmos/auth/v1beta1/accounts/{address}")
}

/// Path of an IBC denom trace.
#[must_use]
pub fn denom_trace_path(hash: &str) -> String {
    format!("/ibc/apps/transfer/v1/denom_traces/{hash}")
}

/// Query parameters selecting one page of one direction, newest first.
#[must_use]
pub fn txs_query(
    address: &str,
    direction: Direction,
    offset: u64,
    limit: u64,
) -> Vec<(&'static str, String)> {
    vec![
        ("events", direction.event_query(address)),
        ("pagination.limit", limit.to_string()),
        ("pagination.offset", offset.to_string()),
        ("pagination.count_total", "true".to_string()),
        ("order_by", "ORDER_BY_DESC".to_string()),
    ]
}
