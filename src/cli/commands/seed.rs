use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::write_log;
use crate::db::pool::DbPool;
use crate::db::seed::seed_catalog;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Load the demo catalog into the configured database.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    init_db(&pool.conn)?;
    seed_catalog(&pool.conn)?;

    write_log(&pool.conn, "seed", "catalog", "Demo catalog loaded")?;
    success("Demo catalog loaded: 6 services, 3 add-ons, 3 stylists.");

    Ok(())
}
