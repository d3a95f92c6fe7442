//! Single-page fetch.

use huahua_types::{Direction, Page, WalletAddress};

use crate::{FetchError, TxApi};

/// Records requested per page.
pub const PAGE_SIZE: u64 = 50;

/// Fetches one page of `direction` for `address` starting at `offset`.
///
/// `offset` must be `0` for the first page of a direction and the previous
/// page's `next_offset` afterwards. The address is validated before any
/// request is made; a malformed address fails with
/// [`FetchError::InvalidAddress`] and is never retried.
///
/// # Errors
///
/// Returns [`FetchError::InvalidAddress`] for malformed addresses and
/// propagates any error of the underlying [`TxApi`].
pub async fn fetch_page<A: TxApi + ?Sized>(
    api: &A,
    address: &str,
    direction: Direction,
    offset: u64,
) -> Result<Page, FetchError> {
    let address = WalletAddress::parse(address)?;
    tracing::debug!(%address, %direction, offset, "Fetching page");
    api.get_txs(address.as_str(), direction, offset, PAGE_SIZE)
        .await
}
