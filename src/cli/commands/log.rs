use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

/// Print the internal audit log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let pool = DbPool::new(&cfg.database)?;
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            info("Log is empty.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("Date", 32),
            Column::new("Operation", 16),
            Column::new("Target", 30),
            Column::new("Message", 48),
        ]);

        for (date, operation, target, message) in rows {
            table.add_row(vec![date, operation, target, message]);
        }

        println!("{}", table.render());
    }

    Ok(())
}
