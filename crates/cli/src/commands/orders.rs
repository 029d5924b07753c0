//! Order browsing commands.
//!
//! # Usage
//!
//! ```bash
//! vitrine orders list --from 2024-03-01 --to 2024-03-07 --stats
//! vitrine orders show 731002
//! ```

use chrono::{Local, NaiveDate};
use clap::Args;
use thiserror::Error;

use vitrine_anymarket::{
    AnyMarketClient, AnyMarketConfig, ConfigError, ListQuery, OrderApiError,
    OrderListController, PageSize, SortDirection, SortField,
};
use vitrine_core::{DateRange, DateRangeError, Marketplace, OrderStatus};

/// Errors that can occur during order commands.
#[derive(Debug, Error)]
pub enum OrdersError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The requested date window is invalid.
    #[error("invalid date range: {0}")]
    DateRange(#[from] DateRangeError),

    /// The API call failed.
    #[error(transparent)]
    Api(#[from] OrderApiError),

    /// An argument could not be parsed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Arguments for `orders list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// First day of the creation-date window (YYYY-MM-DD)
    #[arg(long)]
    pub from: NaiveDate,

    /// Last day of the creation-date window (YYYY-MM-DD)
    #[arg(long)]
    pub to: NaiveDate,

    /// Restrict to one status code (e.g. PAID_WAITING_SHIP)
    #[arg(long)]
    pub status: Option<String>,

    /// Restrict to one marketplace code (e.g. MERCADOLIVRE)
    #[arg(long)]
    pub marketplace: Option<String>,

    /// 1-based page to fetch
    #[arg(long, default_value_t = 1)]
    pub page: u64,

    /// Orders per page (10, 20, 50, or 100)
    #[arg(long, default_value_t = 20)]
    pub page_size: u32,

    /// Sort column: id, created, total, status, marketplace
    #[arg(long, default_value = "created")]
    pub sort: String,

    /// Sort direction: asc or desc
    #[arg(long, default_value = "desc")]
    pub direction: String,

    /// Print aggregate statistics for the fetched page
    #[arg(long)]
    pub stats: bool,
}

/// List a page of orders for a date window.
///
/// # Errors
///
/// Returns [`OrdersError`] if arguments are invalid, configuration is
/// missing, or the API call fails.
#[allow(clippy::print_stdout)]
pub async fn list(args: ListArgs) -> Result<(), OrdersError> {
    let page_size = PageSize::from_u32(args.page_size).ok_or_else(|| {
        OrdersError::InvalidArgument(format!(
            "page size must be 10, 20, 50, or 100 (got {})",
            args.page_size
        ))
    })?;
    let sort_field = parse_sort_field(&args.sort)?;
    let sort_direction = parse_sort_direction(&args.direction)?;

    let today = Local::now().date_naive();
    let range = DateRange::new(Some(args.from), Some(args.to), today)?;
    let query = ListQuery {
        status: args.status.map(OrderStatus::from),
        marketplace: args.marketplace.map(Marketplace::from),
        range,
    };

    let config = AnyMarketConfig::from_env()?;
    let client = AnyMarketClient::new(&config)?;
    let mut controller = OrderListController::new(client, query).with_page_size(page_size);

    controller.fetch_page(args.page).await?;
    controller.sort_current_page(sort_field, sort_direction);

    if controller.orders().is_empty() {
        println!("No orders in this window.");
    } else {
        println!(
            "{:>10}  {:<19}  {:<28}  {:<16}  {:>12}",
            "ID", "CREATED", "STATUS", "MARKETPLACE", "TOTAL"
        );
        for order in controller.orders() {
            println!(
                "{:>10}  {:<19}  {:<28}  {:<16}  {:>12}",
                order.id,
                order.created_at.format("%Y-%m-%d %H:%M:%S"),
                order.status.label(),
                order.marketplace.label(),
                order.total
            );
        }
    }
    println!(
        "\nPage {}/{} - {} orders total",
        controller.page_index(),
        controller.total_pages(),
        controller.total_count()
    );

    if args.stats {
        let stats = controller.statistics();
        println!("\nPage statistics:");
        println!("  orders:  {}", stats.count);
        println!("  total:   {}", stats.total_value);
        println!("  average: {}", stats.average_value);
        for (label, count) in &stats.count_by_marketplace {
            println!("  {label}: {count}");
        }
    }

    Ok(())
}

/// Show one order in full.
///
/// # Errors
///
/// Returns [`OrdersError`] if configuration is missing or the API call
/// fails.
#[allow(clippy::print_stdout)]
pub async fn show(id: i64) -> Result<(), OrdersError> {
    let config = AnyMarketConfig::from_env()?;
    let client = AnyMarketClient::new(&config)?;

    let order = client.get_order(id).await?;

    println!("Order {}", order.id);
    println!("  status:      {}", order.status.label());
    println!("  marketplace: {}", order.marketplace.label());
    println!("  created:     {}", order.created_at);
    println!("  total:       {}", order.total);

    if let Some(buyer) = &order.buyer {
        println!("  buyer:");
        if let Some(name) = &buyer.name {
            println!("    name:     {name}");
        }
        if let Some(email) = &buyer.email {
            println!("    email:    {email}");
        }
        if let Some(document) = &buyer.document {
            println!("    document: {document}");
        }
    }

    if let Some(shipping) = &order.shipping {
        let line = [
            shipping.street.as_deref(),
            shipping.number.as_deref(),
            shipping.neighborhood.as_deref(),
            shipping.city.as_deref(),
            shipping.state.as_deref(),
            shipping.zip_code.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");
        println!("  shipping:    {line}");
    }

    if !order.items.is_empty() {
        println!("  items:");
        for item in &order.items {
            println!(
                "    {:>3} x {:<30} {:>10}  (sku {})",
                item.quantity,
                item.title.as_deref().unwrap_or("-"),
                item.total,
                item.sku.as_deref().unwrap_or("-")
            );
        }
    }

    if !order.payments.is_empty() {
        println!("  payments:");
        for payment in &order.payments {
            println!(
                "    {} {} ({})",
                payment.method.as_deref().unwrap_or("-"),
                payment.value,
                payment.status.as_deref().unwrap_or("-")
            );
        }
    }

    Ok(())
}

fn parse_sort_field(s: &str) -> Result<SortField, OrdersError> {
    match s {
        "id" => Ok(SortField::Id),
        "created" => Ok(SortField::CreatedAt),
        "total" => Ok(SortField::Total),
        "status" => Ok(SortField::Status),
        "marketplace" => Ok(SortField::Marketplace),
        other => Err(OrdersError::InvalidArgument(format!(
            "unknown sort column: {other}"
        ))),
    }
}

fn parse_sort_direction(s: &str) -> Result<SortDirection, OrdersError> {
    match s {
        "asc" => Ok(SortDirection::Asc),
        "desc" => Ok(SortDirection::Desc),
        other => Err(OrdersError::InvalidArgument(format!(
            "unknown sort direction: {other}"
        ))),
    }
}
