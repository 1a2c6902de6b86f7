//! Admin dashboard commands.
//!
//! # Usage
//!
//! ```bash
//! # Dashboard stat cards
//! riddhi admin metrics
//!
//! # Full synthesized order table
//! riddhi admin orders
//!
//! # Only the dashboard's recent rows
//! riddhi admin orders --recent
//! ```

use riddhi_admin::{DashboardMetrics, OrderRow};
use riddhi_core::CatalogStore;

/// Print the dashboard headline numbers.
///
/// # Errors
///
/// Returns a serialization error if the JSON rendering fails.
pub fn metrics(json: bool) -> Result<(), serde_json::Error> {
    let catalog = CatalogStore::seeded();
    let metrics = DashboardMetrics::compute(&catalog);
    if json {
        print_metrics_json(&metrics)?;
    } else {
        print_metrics(&metrics);
    }
    Ok(())
}

/// Print the synthesized order history.
///
/// # Arguments
///
/// * `recent` - Only the dashboard's five most recent rows
pub fn orders(recent: bool) {
    let catalog = CatalogStore::seeded();
    let rows = if recent {
        riddhi_admin::orders::recent(&catalog)
    } else {
        riddhi_admin::orders::synthesize(&catalog)
    };
    print_orders(&rows);
}

#[allow(clippy::print_stdout)]
fn print_metrics(metrics: &DashboardMetrics) {
    println!("Total revenue:  {}", metrics.total_revenue);
    println!("Total orders:   {}", metrics.total_orders);
    println!("Total products: {}", metrics.total_products);
}

#[allow(clippy::print_stdout)]
fn print_metrics_json(metrics: &DashboardMetrics) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(metrics)?);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_orders(rows: &[OrderRow]) {
    println!(
        "{:<9} {:<12} {:<28} {:>10} {:<12} {}",
        "ORDER", "CUSTOMER", "PRODUCT", "AMOUNT", "DATE", "STATUS"
    );
    for row in rows {
        println!(
            "{:<9} {:<12} {:<28} {:>10} {:<12} {}",
            row.reference,
            row.customer,
            row.product_name,
            row.amount,
            row.placed_on,
            row.status.label()
        );
    }
}
