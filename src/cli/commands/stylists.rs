use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::catalog::{get_stylist, load_stylists};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::stylist::Stylist;
use crate::ui::messages::info;
use crate::utils::date::weekday_abbrev;
use crate::utils::formatting::bold;

/// List stylists and their weekly schedules.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stylists { id } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let stylists = match id {
            Some(stylist_id) => vec![get_stylist(&pool.conn, stylist_id)?],
            None => load_stylists(&pool.conn)?,
        };

        if stylists.is_empty() {
            info("No stylists found. Run `bridgebook seed` to load the demo catalog.");
            return Ok(());
        }

        for stylist in &stylists {
            print_stylist(stylist);
        }
    }

    Ok(())
}

fn print_stylist(stylist: &Stylist) {
    println!(
        "{} — {} ({} yrs, rating {:.1})",
        bold(&format!("{} [{}]", stylist.name, stylist.id)),
        stylist.title,
        stylist.years_experience,
        stylist.rating
    );
    println!("  {}", stylist.bio);

    if !stylist.specialties.is_empty() {
        println!("  Specialties: {}", stylist.specialties.join(", "));
    }

    if stylist.schedule.is_empty() {
        println!("  No working days on file.");
    }

    for entry in &stylist.schedule {
        let blocks: Vec<String> = entry
            .blocks
            .iter()
            .map(|b| {
                format!(
                    "{}-{}",
                    b.start.format("%H:%M"),
                    b.end.format("%H:%M")
                )
            })
            .collect();

        let mut line = format!("  {}  {}", weekday_abbrev(entry.day), blocks.join(", "));

        if !entry.breaks.is_empty() {
            let breaks: Vec<String> = entry
                .breaks
                .iter()
                .map(|b| {
                    format!(
                        "{}-{}",
                        b.start.format("%H:%M"),
                        b.end.format("%H:%M")
                    )
                })
                .collect();
            line.push_str(&format!("  (break {})", breaks.join(", ")));
        }

        println!("{}", line);
    }

    println!();
}
