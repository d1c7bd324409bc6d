use crate::errors::{AppError, AppResult};
use crate::export::model::BookingExport;
use csv::Writer;
use std::path::Path;

pub(crate) fn export_csv(bookings: &[BookingExport], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    for booking in bookings {
        wtr.serialize(booking)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}

pub(crate) fn export_json(bookings: &[BookingExport], path: &Path) -> AppResult<()> {
    let json =
        serde_json::to_string_pretty(bookings).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
