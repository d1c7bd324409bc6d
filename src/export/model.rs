use crate::models::booking::BookingRecord;
use serde::Serialize;

/// Flat row shape shared by the CSV and JSON exports.
#[derive(Serialize, Clone, Debug)]
pub struct BookingExport {
    pub id: String,
    pub date: String,
    pub time: String,
    pub service_id: String,
    pub stylist_id: String,
    pub duration_minutes: i64,
    pub add_ons: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub notes: String,
    pub marketing_consent: bool,
    pub created_at: String,
}

impl From<&BookingRecord> for BookingExport {
    fn from(b: &BookingRecord) -> Self {
        Self {
            id: b.id.clone(),
            date: b.date_str(),
            time: b.time_str(),
            service_id: b.service_id.clone(),
            stylist_id: b.stylist_id.clone(),
            duration_minutes: b.duration,
            add_ons: b.add_on_ids.join(";"),
            client_name: b.client_name.clone(),
            client_email: b.client_email.clone(),
            client_phone: b.client_phone.clone(),
            notes: b.notes.clone().unwrap_or_default(),
            marketing_consent: b.marketing_consent,
            created_at: b.created_at.clone(),
        }
    }
}
