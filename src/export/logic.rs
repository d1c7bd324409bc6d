use crate::db::bookings::load_bookings;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::BookingExport;
use crate::export::range::parse_range;
use crate::ui::messages::{success, warning};
use chrono::NaiveDate;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export bookings to `file`.
    ///
    /// - `range`: `None` or `"all"` exports everything; otherwise a
    ///   period (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`) or a `start:end` pair.
    /// - `stylist`: optional stylist-id filter.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        stylist: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let path = crate::utils::path::expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {}",
                file
            )));
        }

        ensure_writable(&path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let bookings = load_bookings(&pool.conn, date_bounds, stylist)?;

        if bookings.is_empty() {
            warning("No bookings found for selected range.");
            return Ok(());
        }

        let rows: Vec<BookingExport> = bookings.iter().map(BookingExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        success(format!(
            "{} export completed: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));

        Ok(())
    }
}
