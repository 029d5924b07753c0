//! Order list browsing state.
//!
//! [`OrderListController`] owns everything the order list screen needs:
//! the current page of orders, page position and size, the active filters
//! and sort, and derived statistics. It talks to the network through
//! [`AnyMarketClient`] and knows nothing about rendering - callers read its
//! state and draw.
//!
//! Two scope rules worth knowing:
//!
//! - **Sort is page-local.** The hub's listing endpoint exposes no usable
//!   sort parameters, so sorting reorders only the page already in memory
//!   and never fetches. Rows cannot move across page boundaries.
//! - **Statistics are page-scoped.** [`OrderListController::statistics`]
//!   aggregates the visible page. [`compute_statistics`] is a free function,
//!   so callers holding a larger set can aggregate that instead.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::instrument;

use vitrine_core::{DateRange, Marketplace, OrderStatus};

use crate::client::{AnyMarketClient, OrderApiError, OrderFilters, OrderPage};
use crate::types::Order;

/// Allowed page sizes for the order list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    Ten,
    #[default]
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    /// The numeric size.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }

    /// Parse a size selection; only 10, 20, 50 and 100 are valid.
    #[must_use]
    pub const fn from_u32(n: u32) -> Option<Self> {
        match n {
            10 => Some(Self::Ten),
            20 => Some(Self::Twenty),
            50 => Some(Self::Fifty),
            100 => Some(Self::Hundred),
            _ => None,
        }
    }
}

/// Sortable columns of the order list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Id,
    #[default]
    CreatedAt,
    Total,
    Status,
    Marketplace,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Where the controller is in its fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    /// Not fetching; `orders` holds the last successful page (possibly none
    /// yet).
    #[default]
    Idle,
    /// A fetch is outstanding.
    Loading,
    /// The last fetch succeeded with zero orders.
    Empty,
}

/// The filter set the order list is browsing.
///
/// The date window is mandatory and pre-validated ([`DateRange`] cannot be
/// constructed invalid); status and marketplace are optional narrowing.
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Restrict to one lifecycle status.
    pub status: Option<OrderStatus>,
    /// Restrict to one marketplace channel.
    pub marketplace: Option<Marketplace>,
    /// Creation-date window.
    pub range: DateRange,
}

impl ListQuery {
    /// Query with only the mandatory date window.
    #[must_use]
    pub const fn for_range(range: DateRange) -> Self {
        Self {
            status: None,
            marketplace: None,
            range,
        }
    }

    fn to_filters(&self) -> OrderFilters {
        OrderFilters {
            status: self.status.clone(),
            marketplace: self.marketplace.clone(),
            created: Some(self.range),
        }
    }
}

/// Aggregate metrics over a set of orders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderStatistics {
    /// Number of orders.
    pub count: u64,
    /// Sum of order totals (missing totals count as zero).
    pub total_value: Decimal,
    /// Mean order total; zero when there are no orders.
    pub average_value: Decimal,
    /// Orders per marketplace, keyed by display label. Unknown channel codes
    /// group under their raw code string.
    pub count_by_marketplace: BTreeMap<String, u64>,
}

/// Aggregate statistics over any order slice.
#[must_use]
pub fn compute_statistics(orders: &[Order]) -> OrderStatistics {
    let count = orders.len() as u64;
    let total_value: Decimal = orders.iter().map(|o| o.total).sum();
    let average_value = if count == 0 {
        Decimal::ZERO
    } else {
        total_value / Decimal::from(count)
    };

    let mut count_by_marketplace = BTreeMap::new();
    for order in orders {
        *count_by_marketplace
            .entry(order.marketplace.label().to_string())
            .or_insert(0) += 1;
    }

    OrderStatistics {
        count,
        total_value,
        average_value,
        count_by_marketplace,
    }
}

/// Browsing state of the back-office order list.
///
/// One instance per list view. All state lives in fields owned by the
/// instance - multiple controllers never interfere. Calls are expected from
/// a single event-processing flow; at most one fetch is logically current
/// at a time, enforced by sequence gating (see [`Self::fetch_page`]).
#[derive(Debug)]
pub struct OrderListController {
    client: AnyMarketClient,
    query: ListQuery,
    page_size: PageSize,
    /// 1-based. Always within `[1, total_pages()]`.
    page_index: u64,
    total_count: u64,
    orders: Vec<Order>,
    sort_field: SortField,
    sort_direction: SortDirection,
    state: FetchState,
    /// Sequence number of the most recently issued fetch. A completing
    /// fetch is applied only if its number still matches, so a stale
    /// response can never overwrite the result of a newer request.
    issued_seq: u64,
}

impl OrderListController {
    /// Create a controller browsing the given query.
    ///
    /// No fetch is issued until [`Self::fetch_page`] is called.
    #[must_use]
    pub fn new(client: AnyMarketClient, query: ListQuery) -> Self {
        Self {
            client,
            query,
            page_size: PageSize::default(),
            page_index: 1,
            total_count: 0,
            orders: Vec::new(),
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            state: FetchState::default(),
            issued_seq: 0,
        }
    }

    /// Choose the page size before the first fetch.
    #[must_use]
    pub const fn with_page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }

    // =========================================================================
    // Fetching
    // =========================================================================

    /// Fetch the given 1-based page of the remote collection.
    ///
    /// Issues exactly one request with `limit`/`offset` derived from the
    /// page size, plus the active filters. On success the page replaces
    /// `orders` wholesale, the active sort is re-applied locally, and
    /// `total_count` is taken from the hub. On failure the previous page is
    /// retained and the error is returned for the caller to surface.
    ///
    /// The loading indicator is cleared on both paths. If a newer fetch was
    /// issued while this one was outstanding, this one's resolution is
    /// ignored entirely.
    ///
    /// # Errors
    ///
    /// Returns [`OrderApiError`] when the request fails; never retries.
    #[instrument(skip(self))]
    pub async fn fetch_page(&mut self, page_index: u64) -> Result<(), OrderApiError> {
        let limit = self.page_size.as_u32();
        let offset = page_index
            .saturating_sub(1)
            .checked_mul(u64::from(limit))
            .ok_or_else(|| {
                OrderApiError::BadRequest(format!("page {page_index} is out of range"))
            })?;
        let filters = self.query.to_filters();

        let seq = self.begin_fetch();
        let result = self.client.list_orders(limit, offset, &filters).await;
        self.complete_fetch(seq, page_index, result)
    }

    /// Jump to page `n`.
    ///
    /// Out-of-range targets are a strict no-op: no fetch is issued and no
    /// state changes. Returns whether a fetch was performed.
    ///
    /// # Errors
    ///
    /// Returns [`OrderApiError`] when the in-range fetch fails.
    pub async fn go_to_page(&mut self, n: u64) -> Result<bool, OrderApiError> {
        if n < 1 || n > self.total_pages() {
            return Ok(false);
        }
        self.fetch_page(n).await.map(|()| true)
    }

    /// Advance one page; no-op on the last page.
    ///
    /// # Errors
    ///
    /// Returns [`OrderApiError`] when the fetch fails.
    pub async fn next_page(&mut self) -> Result<bool, OrderApiError> {
        if self.page_index >= self.total_pages() {
            return Ok(false);
        }
        self.go_to_page(self.page_index + 1).await
    }

    /// Go back one page; no-op on the first page.
    ///
    /// # Errors
    ///
    /// Returns [`OrderApiError`] when the fetch fails.
    pub async fn previous_page(&mut self) -> Result<bool, OrderApiError> {
        if self.page_index <= 1 {
            return Ok(false);
        }
        self.go_to_page(self.page_index - 1).await
    }

    /// Change the page size and refetch from page 1.
    ///
    /// The new size is committed only when the refetch succeeds; on failure
    /// the previous size is restored along with the retained page, so the
    /// retained orders always fit the active page size.
    ///
    /// # Errors
    ///
    /// Returns [`OrderApiError`] when the refetch fails.
    pub async fn set_page_size(&mut self, size: PageSize) -> Result<(), OrderApiError> {
        let previous = self.page_size;
        self.page_size = size;
        if let Err(e) = self.fetch_page(1).await {
            self.page_size = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Replace the filter set and refetch from page 1.
    ///
    /// The new filters are committed only when the refetch succeeds; on
    /// failure the previous filters are restored along with the retained
    /// page.
    ///
    /// # Errors
    ///
    /// Returns [`OrderApiError`] when the refetch fails.
    pub async fn set_query(&mut self, query: ListQuery) -> Result<(), OrderApiError> {
        let previous = std::mem::replace(&mut self.query, query);
        if let Err(e) = self.fetch_page(1).await {
            self.query = previous;
            return Err(e);
        }
        Ok(())
    }

    fn begin_fetch(&mut self) -> u64 {
        self.issued_seq += 1;
        self.state = FetchState::Loading;
        self.issued_seq
    }

    fn complete_fetch(
        &mut self,
        seq: u64,
        page_index: u64,
        result: Result<OrderPage, OrderApiError>,
    ) -> Result<(), OrderApiError> {
        // A newer fetch superseded this one; its completion owns the state.
        if seq != self.issued_seq {
            return Ok(());
        }

        match result {
            Ok(mut page) => {
                // Keep the page within the requested size even if the hub
                // over-returns.
                page.orders.truncate(self.page_size.as_u32() as usize);
                sort_orders(&mut page.orders, self.sort_field, self.sort_direction);

                self.total_count = page.total_count;
                self.page_index = page_index.clamp(1, self.total_pages());
                self.state = if page.orders.is_empty() {
                    FetchState::Empty
                } else {
                    FetchState::Idle
                };
                self.orders = page.orders;
                Ok(())
            }
            Err(e) => {
                // Previous page retained; the caller surfaces the error.
                self.state = FetchState::Idle;
                Err(e)
            }
        }
    }

    // =========================================================================
    // Local operations
    // =========================================================================

    /// Re-sort the current page in place and remember the selection for
    /// subsequent fetches.
    ///
    /// The sort is stable (equal keys keep their relative order) and purely
    /// local - it never fetches, so it cannot reorder across page
    /// boundaries.
    pub fn sort_current_page(&mut self, field: SortField, direction: SortDirection) -> &[Order] {
        self.sort_field = field;
        self.sort_direction = direction;
        sort_orders(&mut self.orders, field, direction);
        &self.orders
    }

    /// Statistics over the currently visible page.
    #[must_use]
    pub fn statistics(&self) -> OrderStatistics {
        compute_statistics(&self.orders)
    }

    /// Borrow one order of the current page for the detail view.
    #[must_use]
    pub fn order_detail(&self, index: usize) -> Option<&Order> {
        self.orders.get(index)
    }

    // =========================================================================
    // State accessors
    // =========================================================================

    /// Orders of the current page, in display order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Current 1-based page number.
    #[must_use]
    pub const fn page_index(&self) -> u64 {
        self.page_index
    }

    /// Current page size.
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Total matching orders across all pages.
    #[must_use]
    pub const fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Number of pages, never less than 1: page 1 of an empty result set is
    /// still page 1.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.total_count
            .div_ceil(u64::from(self.page_size.as_u32()))
            .max(1)
    }

    /// Where the controller is in its fetch lifecycle.
    #[must_use]
    pub const fn state(&self) -> FetchState {
        self.state
    }

    /// The active sort selection.
    #[must_use]
    pub const fn sort(&self) -> (SortField, SortDirection) {
        (self.sort_field, self.sort_direction)
    }

    /// The active filter set.
    #[must_use]
    pub const fn query(&self) -> &ListQuery {
        &self.query
    }
}

/// Stable in-place sort by one column.
///
/// Timestamp and monetary columns compare by value; status and marketplace
/// compare by display label. Descending reverses each comparison, which
/// leaves equal keys in their original relative order.
fn sort_orders(orders: &mut [Order], field: SortField, direction: SortDirection) {
    orders.sort_by(|a, b| {
        let ordering = match field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::Total => a.total.cmp(&b.total),
            SortField::Status => a.status.label().cmp(b.status.label()),
            SortField::Marketplace => a.marketplace.label().cmp(b.marketplace.label()),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}
