use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::write_log;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let cfg = Config::load()?;
    let db_path = if let Some(custom) = &cli.db {
        custom.clone()
    } else {
        cfg.database.clone()
    };

    println!("Initializing bridgebook…");
    println!("Config file : {}", Config::config_file().display());
    println!("Database    : {}", db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    success(format!("Database initialized at {}", db_path));

    if let Err(e) = write_log(
        &conn,
        "init",
        &db_path,
        "Database initialized",
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    Ok(())
}
