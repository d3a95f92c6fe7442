//! Dual-direction collection.

use huahua_estimate::ProgressReporter;
use huahua_types::{Direction, RawTransaction};

use crate::{FetchError, TxApi, fetch_page};

/// Walks the sender and recipient streams of an account.
///
/// Directions are fetched one after the other (sender first), each with its
/// own offset cursor and each capped at `max_pages` pages. Both share one
/// page counter that is only used for progress display.
#[derive(Debug)]
pub struct Collector<'a, A: ?Sized> {
    api: &'a A,
    max_pages: u64,
}

impl<'a, A: TxApi + ?Sized> Collector<'a, A> {
    /// Creates a collector fetching at most `max_pages` pages per direction.
    #[must_use]
    pub const fn new(api: &'a A, max_pages: u64) -> Self {
        Self { api, max_pages }
    }

    /// Fetches every page of both directions.
    ///
    /// Records are returned in fetch order: all sender pages, then all
    /// recipient pages. `pages_estimated` is only used in progress messages.
    ///
    /// # Errors
    ///
    /// The first fetch error aborts the whole collection.
    pub async fn collect<P: ProgressReporter + ?Sized>(
        &self,
        address: &str,
        pages_estimated: u64,
        progress: &mut P,
    ) -> Result<Vec<RawTransaction>, FetchError> {
        let mut out = Vec::new();
        let mut current_page = 0;

        for direction in Direction::ALL {
            self.collect_direction(
                address,
                direction,
                pages_estimated,
                &mut current_page,
                progress,
                &mut out,
            )
            .await?;
        }

        Ok(out)
    }

    async fn collect_direction<P: ProgressReporter + ?Sized>(
        &self,
        address: &str,
        direction: Direction,
        pages_estimated: u64,
        current_page: &mut u64,
        progress: &mut P,
        out: &mut Vec<RawTransaction>,
    ) -> Result<(), FetchError> {
        let mut offset = Some(0);
        let mut pages = 0;

        while let Some(cursor) = offset {
            if pages >= self.max_pages {
                tracing::info!(%direction, pages, "Reached page cap");
                break;
            }

            let message = format!("Fetching page {} of {}", *current_page + 1, pages_estimated);
            progress.report(*current_page, &message);
            *current_page += 1;
            pages += 1;

            let page = fetch_page(self.api, address, direction, cursor).await?;
            out.extend(page.records);
            offset = page.next_offset;
        }

        Ok(())
    }
}
