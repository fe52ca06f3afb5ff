use serde::{Deserialize, Serialize};

/// Shared unit prices and rates applied to every window in a project.
///
/// All values are non-negative; negativity is rejected by project validation
/// before any estimation, not inside the cost formulas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// Powder coating rate in ₹/kg of section weight.
    pub powder_coating_rate: f64,
    /// Labor rate in ₹/ft² of window area.
    pub labor_rate: f64,
    /// Price of a single clamp in ₹.
    pub clamp_price: f64,
    /// Clear glass rate in ₹/ft².
    pub clear_glass_rate: f64,
    /// Reflective glass rate in ₹/ft².
    pub reflective_glass_rate: f64,
    /// Rubber gasket rate in ₹/ft.
    pub rubber_rate: f64,
    /// Price of the lock in ₹ (one per window, independent of size).
    pub lock_price: f64,
    /// Price of a single bearing in ₹.
    pub bearing_price: f64,
    /// Wool file (weather strip) rate in ₹/ft.
    pub wool_file_rate: f64,
    /// Other charges in ₹/ft² (packing, transport, wastage).
    pub other_charges_rate: f64,
}

impl RateTable {
    /// Creates a rate table with the standard workshop defaults.
    pub fn new() -> Self {
        Self {
            powder_coating_rate: 60.0,
            labor_rate: 50.0,
            clamp_price: 20.0,
            clear_glass_rate: 45.0,
            reflective_glass_rate: 75.0,
            rubber_rate: 8.0,
            lock_price: 200.0,
            bearing_price: 45.0,
            wool_file_rate: 2.0,
            other_charges_rate: 5.0,
        }
    }

    /// Returns each rate paired with its display label, in presentation order.
    pub fn fields(&self) -> [(&'static str, f64); 10] {
        [
            ("Powder Coating (₹/kg)", self.powder_coating_rate),
            ("Labor (₹/ft²)", self.labor_rate),
            ("Clamp (₹/pc)", self.clamp_price),
            ("Clear Glass (₹/ft²)", self.clear_glass_rate),
            ("Reflective Glass (₹/ft²)", self.reflective_glass_rate),
            ("Rubber (₹/ft)", self.rubber_rate),
            ("Lock (₹/pc)", self.lock_price),
            ("Bearing (₹/pc)", self.bearing_price),
            ("Wool File (₹/ft)", self.wool_file_rate),
            ("Other Charges (₹/ft²)", self.other_charges_rate),
        ]
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::new()
    }
}
