use crate::models::add_on::AddOn;
use crate::models::service::Service;

/// Totals for a service plus the selected add-ons. The duration feeds the
/// slot engine; the price is display-only.
#[derive(Debug, Clone, Copy)]
pub struct Quote {
    pub total_duration: i64,
    pub total_price_cents: i64,
}

pub fn build_quote(service: &Service, add_ons: &[AddOn]) -> Quote {
    let add_on_duration: i64 = add_ons.iter().map(|a| a.duration).sum();
    let add_on_price: i64 = add_ons.iter().map(|a| a.price_cents).sum();

    Quote {
        total_duration: service.duration + add_on_duration,
        total_price_cents: service.price_cents + add_on_price,
    }
}
