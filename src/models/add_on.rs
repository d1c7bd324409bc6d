use serde::Serialize;

/// Optional extra bolted onto a service; extends both the appointment
/// duration and the price.
#[derive(Debug, Clone, Serialize)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration: i64,    // ⇔ add_ons.duration_minutes
    pub price_cents: i64, // ⇔ add_ons.price_cents
    pub recommended_for: Vec<String>, // service ids
}

impl AddOn {
    pub fn is_recommended_for(&self, service_id: &str) -> bool {
        self.recommended_for.iter().any(|id| id == service_id)
    }
}
