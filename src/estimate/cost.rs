//! Per-window cost calculation.
//!
//! All formulas work in feet and kilograms. Results stay as raw `f64`;
//! rounding to two decimals is a presentation concern and happens only when
//! values are formatted, never mid-calculation.

use serde::{Deserialize, Serialize};

use crate::model::profile::Profile;
use crate::model::rates::RateTable;
use crate::model::window::GlassType;

/// The thirteen cost components of a window, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostComponent {
    OuterFrame,
    InnerFrame,
    ClampingLock,
    OuterClamps,
    InnerClamps,
    PowderCoating,
    Glass,
    Labor,
    Rubber,
    Lock,
    Bearings,
    WoolFile,
    OtherCharges,
}

impl CostComponent {
    pub const ALL: [CostComponent; 13] = [
        CostComponent::OuterFrame,
        CostComponent::InnerFrame,
        CostComponent::ClampingLock,
        CostComponent::OuterClamps,
        CostComponent::InnerClamps,
        CostComponent::PowderCoating,
        CostComponent::Glass,
        CostComponent::Labor,
        CostComponent::Rubber,
        CostComponent::Lock,
        CostComponent::Bearings,
        CostComponent::WoolFile,
        CostComponent::OtherCharges,
    ];

    /// Display heading for this component.
    pub fn label(&self) -> &'static str {
        match self {
            CostComponent::OuterFrame => "Outer Frame",
            CostComponent::InnerFrame => "Inner Frame",
            CostComponent::ClampingLock => "Clamping Lock",
            CostComponent::OuterClamps => "Outer Clamps",
            CostComponent::InnerClamps => "Inner Clamps",
            CostComponent::PowderCoating => "Powder Coating",
            CostComponent::Glass => "Glass",
            CostComponent::Labor => "Labor",
            CostComponent::Rubber => "Rubber",
            CostComponent::Lock => "Lock",
            CostComponent::Bearings => "Bearings",
            CostComponent::WoolFile => "Wool File",
            CostComponent::OtherCharges => "Other Charges",
        }
    }
}

/// Cost of one window split into the thirteen components, in ₹.
///
/// The component set is closed by construction: every breakdown carries all
/// thirteen fields, so a partial breakdown cannot exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub outer_frame: f64,
    pub inner_frame: f64,
    pub clamping_lock: f64,
    pub outer_clamps: f64,
    pub inner_clamps: f64,
    pub powder_coating: f64,
    pub glass: f64,
    pub labor: f64,
    pub rubber: f64,
    pub lock: f64,
    pub bearings: f64,
    pub wool_file: f64,
    pub other_charges: f64,
}

impl CostBreakdown {
    pub fn zero() -> Self {
        Self {
            outer_frame: 0.0,
            inner_frame: 0.0,
            clamping_lock: 0.0,
            outer_clamps: 0.0,
            inner_clamps: 0.0,
            powder_coating: 0.0,
            glass: 0.0,
            labor: 0.0,
            rubber: 0.0,
            lock: 0.0,
            bearings: 0.0,
            wool_file: 0.0,
            other_charges: 0.0,
        }
    }

    pub fn component(&self, component: CostComponent) -> f64 {
        match component {
            CostComponent::OuterFrame => self.outer_frame,
            CostComponent::InnerFrame => self.inner_frame,
            CostComponent::ClampingLock => self.clamping_lock,
            CostComponent::OuterClamps => self.outer_clamps,
            CostComponent::InnerClamps => self.inner_clamps,
            CostComponent::PowderCoating => self.powder_coating,
            CostComponent::Glass => self.glass,
            CostComponent::Labor => self.labor,
            CostComponent::Rubber => self.rubber,
            CostComponent::Lock => self.lock,
            CostComponent::Bearings => self.bearings,
            CostComponent::WoolFile => self.wool_file,
            CostComponent::OtherCharges => self.other_charges,
        }
    }

    fn component_mut(&mut self, component: CostComponent) -> &mut f64 {
        match component {
            CostComponent::OuterFrame => &mut self.outer_frame,
            CostComponent::InnerFrame => &mut self.inner_frame,
            CostComponent::ClampingLock => &mut self.clamping_lock,
            CostComponent::OuterClamps => &mut self.outer_clamps,
            CostComponent::InnerClamps => &mut self.inner_clamps,
            CostComponent::PowderCoating => &mut self.powder_coating,
            CostComponent::Glass => &mut self.glass,
            CostComponent::Labor => &mut self.labor,
            CostComponent::Rubber => &mut self.rubber,
            CostComponent::Lock => &mut self.lock,
            CostComponent::Bearings => &mut self.bearings,
            CostComponent::WoolFile => &mut self.wool_file,
            CostComponent::OtherCharges => &mut self.other_charges,
        }
    }

    /// Sum of all thirteen components.
    pub fn total(&self) -> f64 {
        CostComponent::ALL
            .into_iter()
            .map(|c| self.component(c))
            .sum()
    }

    /// Adds another breakdown component-wise (used by project aggregation).
    pub fn accumulate(&mut self, other: &CostBreakdown) {
        for c in CostComponent::ALL {
            *self.component_mut(c) += other.component(c);
        }
    }

    /// Components with their values, in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (CostComponent, f64)> + '_ {
        CostComponent::ALL
            .into_iter()
            .map(move |c| (c, self.component(c)))
    }
}

impl Default for CostBreakdown {
    fn default() -> Self {
        Self::zero()
    }
}

/// Full pricing result for one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowEstimate {
    /// Glazed area in ft².
    pub area: f64,
    /// Outer frame section weight in kg.
    pub outer_weight: f64,
    /// Inner frame section weight in kg.
    pub inner_weight: f64,
    /// Clamping lock section weight in kg.
    pub clamping_weight: f64,
    /// Total aluminium weight in kg.
    pub total_weight: f64,
    pub costs: CostBreakdown,
    /// Sum of all thirteen cost components in ₹.
    pub total_cost: f64,
}

/// Prices a single window. Dimensions must already be in feet.
///
/// This is a total function: every input combination yields a fully
/// populated estimate. Rejection of non-physical inputs (zero dimensions,
/// stray track counts) is the caller's job, done once at the project
/// boundary by [`super::validate::validate_project`].
///
/// Weight model: the outer frame runs around the perimeter; each track
/// carries three vertical inner sections; the clamping lock contributes two
/// heights per window.
pub fn estimate_window(
    width: f64,
    height: f64,
    tracks: u32,
    glass: GlassType,
    rates: &RateTable,
    outer: &Profile,
    inner: &Profile,
    clamp: &Profile,
) -> WindowEstimate {
    let tracks = f64::from(tracks);

    let area = width * height;
    let outer_perimeter = 2.0 * (width + height);
    let outer_weight = outer_perimeter * outer.weight_per_ft;
    let inner_weight = tracks * 3.0 * height * inner.weight_per_ft;
    let clamping_weight = height * 2.0 * clamp.weight_per_ft;
    let total_weight = outer_weight + inner_weight + clamping_weight;

    let glass_rate = match glass {
        GlassType::Clear => rates.clear_glass_rate,
        GlassType::Reflective => rates.reflective_glass_rate,
    };

    let costs = CostBreakdown {
        outer_frame: outer_weight * outer.rate_per_kg,
        inner_frame: inner_weight * inner.rate_per_kg,
        clamping_lock: clamping_weight * clamp.rate_per_kg,
        outer_clamps: 4.0 * rates.clamp_price,
        inner_clamps: tracks * 4.0 * 2.0 * rates.clamp_price,
        powder_coating: total_weight * rates.powder_coating_rate,
        glass: area * glass_rate,
        labor: area * rates.labor_rate,
        rubber: tracks * 3.0 * height * rates.rubber_rate,
        lock: rates.lock_price,
        bearings: tracks * 2.0 * rates.bearing_price,
        wool_file: (outer_perimeter + 2.0 * width + 2.0 * height + tracks * 2.0 * height)
            * rates.wool_file_rate,
        other_charges: area * rates.other_charges_rate,
    };
    let total_cost = costs.total();

    WindowEstimate {
        area,
        outer_weight,
        inner_weight,
        clamping_weight,
        total_weight,
        costs,
        total_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::profile::{ProfileCatalog, ProfileKind};

    fn preset(kind: ProfileKind) -> Profile {
        ProfileCatalog::with_presets(kind).get(0).unwrap().clone()
    }

    fn reference_estimate() -> WindowEstimate {
        estimate_window(
            4.0,
            4.0,
            2,
            GlassType::Clear,
            &RateTable::new(),
            &preset(ProfileKind::Outer),
            &preset(ProfileKind::Inner),
            &preset(ProfileKind::Clamp),
        )
    }

    #[test]
    fn test_reference_window_geometry_and_weights() {
        let est = reference_estimate();
        assert!((est.area - 16.0).abs() < 1e-10);
        // outer: 16 ft perimeter * 0.206 kg/ft
        assert!((est.outer_weight - 3.296).abs() < 1e-10);
        // inner: 2 tracks * 3 * 4 ft * 0.187 kg/ft
        assert!((est.inner_weight - 4.488).abs() < 1e-10);
        // clamp: 4 ft * 2 * 0.17 kg/ft
        assert!((est.clamping_weight - 1.36).abs() < 1e-10);
        assert!((est.total_weight - 9.144).abs() < 1e-10);
    }

    #[test]
    fn test_reference_window_costs() {
        let est = reference_estimate();
        assert!((est.costs.outer_frame - 3.296 * 325.0).abs() < 1e-9);
        assert!((est.costs.inner_frame - 4.488 * 325.0).abs() < 1e-9);
        assert!((est.costs.clamping_lock - 1.36 * 320.0).abs() < 1e-9);
        assert!((est.costs.outer_clamps - 80.0).abs() < 1e-10);
        assert!((est.costs.inner_clamps - 320.0).abs() < 1e-10);
        assert!((est.costs.powder_coating - 9.144 * 60.0).abs() < 1e-9);
        assert!((est.costs.glass - 720.0).abs() < 1e-10);
        assert!((est.costs.labor - 800.0).abs() < 1e-10);
        assert!((est.costs.rubber - 192.0).abs() < 1e-10);
        assert!((est.costs.lock - 200.0).abs() < 1e-10);
        assert!((est.costs.bearings - 180.0).abs() < 1e-10);
        // wool file: (16 + 8 + 8 + 16) ft * 2 ₹/ft
        assert!((est.costs.wool_file - 96.0).abs() < 1e-10);
        assert!((est.costs.other_charges - 80.0).abs() < 1e-10);
        assert!((est.total_cost - 6181.64).abs() < 1e-9);
    }

    #[test]
    fn test_total_cost_reconstructs_from_components() {
        let est = estimate_window(
            7.25,
            3.5,
            3,
            GlassType::Reflective,
            &RateTable::new(),
            &preset(ProfileKind::Outer),
            &preset(ProfileKind::Inner),
            &preset(ProfileKind::Clamp),
        );
        let sum: f64 = est.costs.iter().map(|(_, v)| v).sum();
        assert!((est.total_cost - sum).abs() < 1e-9);
        assert_eq!(est.costs.iter().count(), 13);
    }

    #[test]
    fn test_glass_type_selects_rate() {
        let rates = RateTable::new();
        let outer = preset(ProfileKind::Outer);
        let inner = preset(ProfileKind::Inner);
        let clamp = preset(ProfileKind::Clamp);
        let clear = estimate_window(4.0, 4.0, 2, GlassType::Clear, &rates, &outer, &inner, &clamp);
        let refl = estimate_window(
            4.0,
            4.0,
            2,
            GlassType::Reflective,
            &rates,
            &outer,
            &inner,
            &clamp,
        );
        assert!((clear.costs.glass - 16.0 * 45.0).abs() < 1e-10);
        assert!((refl.costs.glass - 16.0 * 75.0).abs() < 1e-10);
        // Only the glass component differs.
        assert!(
            ((refl.total_cost - clear.total_cost) - (refl.costs.glass - clear.costs.glass)).abs()
                < 1e-9
        );
    }

    #[test]
    fn test_lock_cost_is_independent_of_size() {
        let rates = RateTable::new();
        let outer = preset(ProfileKind::Outer);
        let inner = preset(ProfileKind::Inner);
        let clamp = preset(ProfileKind::Clamp);
        let small = estimate_window(2.0, 2.0, 2, GlassType::Clear, &rates, &outer, &inner, &clamp);
        let large = estimate_window(10.0, 8.0, 4, GlassType::Clear, &rates, &outer, &inner, &clamp);
        assert!((small.costs.lock - 200.0).abs() < 1e-10);
        assert!((large.costs.lock - 200.0).abs() < 1e-10);
    }

    #[test]
    fn test_track_count_scales_track_bound_components() {
        let rates = RateTable::new();
        let outer = preset(ProfileKind::Outer);
        let inner = preset(ProfileKind::Inner);
        let clamp = preset(ProfileKind::Clamp);
        let two = estimate_window(4.0, 4.0, 2, GlassType::Clear, &rates, &outer, &inner, &clamp);
        let three = estimate_window(4.0, 4.0, 3, GlassType::Clear, &rates, &outer, &inner, &clamp);
        assert!((three.inner_weight / two.inner_weight - 1.5).abs() < 1e-10);
        assert!((three.costs.inner_clamps / two.costs.inner_clamps - 1.5).abs() < 1e-10);
        assert!((three.costs.bearings / two.costs.bearings - 1.5).abs() < 1e-10);
        assert!((three.costs.rubber / two.costs.rubber - 1.5).abs() < 1e-10);
        // Outer frame is track-independent.
        assert!((three.costs.outer_frame - two.costs.outer_frame).abs() < 1e-10);
    }

    #[test]
    fn test_total_cost_monotone_in_each_rate() {
        let outer = preset(ProfileKind::Outer);
        let inner = preset(ProfileKind::Inner);
        let clamp = preset(ProfileKind::Clamp);
        let base = estimate_window(
            5.0,
            3.0,
            3,
            GlassType::Clear,
            &RateTable::new(),
            &outer,
            &inner,
            &clamp,
        );

        let bumps: [fn(&mut RateTable); 9] = [
            |r| r.powder_coating_rate += 10.0,
            |r| r.labor_rate += 10.0,
            |r| r.clamp_price += 10.0,
            |r| r.clear_glass_rate += 10.0,
            |r| r.rubber_rate += 10.0,
            |r| r.lock_price += 10.0,
            |r| r.bearing_price += 10.0,
            |r| r.wool_file_rate += 10.0,
            |r| r.other_charges_rate += 10.0,
        ];
        for bump in bumps {
            let mut rates = RateTable::new();
            bump(&mut rates);
            let bumped = estimate_window(
                5.0,
                3.0,
                3,
                GlassType::Clear,
                &rates,
                &outer,
                &inner,
                &clamp,
            );
            assert!(bumped.total_cost > base.total_cost);
        }

        // Reflective rate does not affect a clear-glass window.
        let mut rates = RateTable::new();
        rates.reflective_glass_rate += 10.0;
        let bumped = estimate_window(
            5.0,
            3.0,
            3,
            GlassType::Clear,
            &rates,
            &outer,
            &inner,
            &clamp,
        );
        assert!((bumped.total_cost - base.total_cost).abs() < 1e-10);
    }

    #[test]
    fn test_component_labels_are_distinct() {
        let mut labels: Vec<&str> = CostComponent::ALL.iter().map(|c| c.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 13);
    }
}
