use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

/// Export booking data to CSV or JSON.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        stylist,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        ExportLogic::export(
            &mut pool,
            format.clone(),
            file,
            range,
            stylist.as_deref(),
            *force,
        )?;
    }

    Ok(())
}
