use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::book::{BookLogic, ClientDetails};
use crate::db::catalog::{get_add_ons, get_service, get_stylist};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_date;
use crate::utils::time::{format_time_display, parse_time};
use crate::utils::{format_duration, format_price};

/// Book an appointment at a start time chosen from `slots`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Book {
        date,
        time,
        stylist,
        service,
        add_ons,
        name,
        email,
        phone,
        notes,
        marketing,
    } = cmd
    {
        let day = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let start = parse_time(time).ok_or_else(|| AppError::InvalidTime(time.to_string()))?;

        let mut pool = DbPool::new(&cfg.database)?;
        let service = get_service(&pool.conn, service)?;
        let add_ons = get_add_ons(&pool.conn, add_ons)?;
        let stylist = get_stylist(&pool.conn, stylist)?;

        if !stylist.offers(&service.id) {
            warning(format!(
                "{} does not list '{}' among their specialties.",
                stylist.name, service.id
            ));
        }

        let client = ClientDetails {
            name: name.clone(),
            email: email.clone(),
            phone: phone.clone(),
            notes: notes.clone(),
            marketing_consent: *marketing,
        };

        let result = BookLogic::submit(
            &mut pool,
            &service,
            &add_ons,
            &stylist,
            day,
            start,
            &client,
            &cfg.confirmation_prefix,
        );

        let confirmation = match result {
            Err(err @ AppError::SlotConflict { .. }) => {
                warning(format!(
                    "That slot is taken. Run `bridgebook slots {} --stylist {} --service {}` to pick a new time.",
                    date, stylist.id, service.id
                ));
                return Err(err);
            }
            other => other?,
        };

        success(format!(
            "Booking confirmed — {} ({})",
            confirmation.code, confirmation.booking.id
        ));
        println!(
            "  {} with {} on {} at {}",
            service.name,
            stylist.name,
            date,
            format_time_display(day, time)?
        );

        if !add_ons.is_empty() {
            let names: Vec<&str> = add_ons.iter().map(|a| a.name.as_str()).collect();
            println!("  Add-ons: {}", names.join(", "));
        }

        println!(
            "  Total: {} ({})",
            format_price(confirmation.quote.total_price_cents),
            format_duration(confirmation.quote.total_duration)
        );

        for add_on in &add_ons {
            if !add_on.is_recommended_for(&service.id) {
                warning(format!(
                    "'{}' is not usually paired with {}.",
                    add_on.name, service.name
                ));
            }
        }
    }

    Ok(())
}
