use crate::config::Config;
use crate::db::catalog::{load_add_ons, load_services};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use crate::utils::{format_duration, format_price};

/// List services and add-ons with durations and prices.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    let services = load_services(&pool.conn)?;
    let add_ons = load_add_ons(&pool.conn)?;

    if services.is_empty() {
        info("No services found. Run `bridgebook seed` to load the demo catalog.");
        return Ok(());
    }

    println!("{}", bold("Services"));
    let mut table = Table::new(vec![
        Column::new("ID", 18),
        Column::new("Name", 20),
        Column::new("Duration", 9),
        Column::new("Price", 8),
        Column::new("Category", 9),
        Column::new("Includes", 40),
    ]);

    for service in &services {
        table.add_row(vec![
            service.id.clone(),
            service.name.clone(),
            format_duration(service.duration),
            format_price(service.price_cents),
            service.category.to_db_str().to_string(),
            service.includes.join(", "),
        ]);
    }
    println!("{}", table.render());

    if !add_ons.is_empty() {
        println!("{}", bold("Add-ons"));
        let mut table = Table::new(vec![
            Column::new("ID", 18),
            Column::new("Name", 20),
            Column::new("Duration", 9),
            Column::new("Price", 8),
            Column::new("Recommended for", 40),
        ]);

        for add_on in &add_ons {
            table.add_row(vec![
                add_on.id.clone(),
                add_on.name.clone(),
                format_duration(add_on.duration),
                format_price(add_on.price_cents),
                add_on.recommended_for.join(", "),
            ]);
        }
        println!("{}", table.render());
    }

    Ok(())
}
