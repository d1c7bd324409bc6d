use serde::Serialize;

/// Service category as stored in the `services.category` column.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ServiceCategory {
    Cut,
    Shave,
    Beard,
    Color,
    Package,
}

impl ServiceCategory {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ServiceCategory::Cut => "cut",
            ServiceCategory::Shave => "shave",
            ServiceCategory::Beard => "beard",
            ServiceCategory::Color => "color",
            ServiceCategory::Package => "package",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "cut" => Some(ServiceCategory::Cut),
            "shave" => Some(ServiceCategory::Shave),
            "beard" => Some(ServiceCategory::Beard),
            "color" => Some(ServiceCategory::Color),
            "package" => Some(ServiceCategory::Package),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub id: String,          // ⇔ services.id (TEXT, slug)
    pub name: String,        // ⇔ services.name
    pub description: String, // ⇔ services.description
    pub duration: i64,       // ⇔ services.duration_minutes
    pub price_cents: i64,    // ⇔ services.price_cents
    pub category: ServiceCategory,
    pub includes: Vec<String>, // ⇔ services.includes (JSON array)
}
