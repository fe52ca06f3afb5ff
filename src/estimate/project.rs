//! Project-wide aggregation over all windows.

use serde::{Deserialize, Serialize};

use super::cost::{CostBreakdown, WindowEstimate, estimate_window};
use super::validate::{ValidationError, validate_project};
use crate::model::profile::ProfileKind;
use crate::model::project::Project;
use crate::model::units::to_feet;
use crate::uid::WindowId;

/// Aggregated estimate for a whole project.
///
/// All sums are raw `f64`; only the two averages are carried as two-decimal
/// strings because that is their presentation contract, including the
/// `"0.00"` sentinel for an empty project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEstimate {
    pub total_windows: usize,
    /// Sum of window areas in ft².
    pub total_area: f64,
    /// Sum of outer frame weights in kg.
    pub outer_frame_weight: f64,
    /// Sum of inner frame weights in kg.
    pub inner_frame_weight: f64,
    /// Sum of total aluminium weights in kg.
    pub total_weight: f64,
    /// Sum of all window costs in ₹.
    pub grand_total: f64,
    /// Component-wise sum of every window's cost breakdown.
    pub aggregated_costs: CostBreakdown,
    /// Per-window estimates, in the project's insertion order.
    pub window_estimates: Vec<(WindowId, WindowEstimate)>,
    /// Grand total divided by total area, `"0.00"` when the area is zero.
    pub avg_cost_per_sqft: String,
    /// Grand total divided by window count, `"0.00"` for an empty project.
    pub avg_cost_per_window: String,
}

impl ProjectEstimate {
    fn new() -> Self {
        Self {
            total_windows: 0,
            total_area: 0.0,
            outer_frame_weight: 0.0,
            inner_frame_weight: 0.0,
            total_weight: 0.0,
            grand_total: 0.0,
            aggregated_costs: CostBreakdown::zero(),
            window_estimates: Vec::new(),
            avg_cost_per_sqft: "0.00".to_string(),
            avg_cost_per_window: "0.00".to_string(),
        }
    }
}

/// Validates the project, then prices every window and reduces the results.
///
/// Summation is commutative, so the totals do not depend on window order
/// beyond floating-point tolerance; the per-window list keeps insertion
/// order for display.
pub fn estimate_project(project: &Project) -> Result<ProjectEstimate, ValidationError> {
    validate_project(project)?;

    let mut result = ProjectEstimate::new();

    for (id, win) in project.windows() {
        let width = to_feet(win.width, win.unit);
        let height = to_feet(win.height, win.unit);
        // Catalogs are non-empty after validation, so resolution cannot fail;
        // the error arm guards hand-built states that bypass validation.
        let outer = project
            .catalog(ProfileKind::Outer)
            .resolve(win.outer_profile)
            .ok_or(ValidationError::EmptyCatalog(ProfileKind::Outer))?;
        let inner = project
            .catalog(ProfileKind::Inner)
            .resolve(win.inner_profile)
            .ok_or(ValidationError::EmptyCatalog(ProfileKind::Inner))?;
        let clamp = project
            .catalog(ProfileKind::Clamp)
            .resolve(win.clamp_profile)
            .ok_or(ValidationError::EmptyCatalog(ProfileKind::Clamp))?;

        let est = estimate_window(
            width,
            height,
            win.tracks,
            win.glass,
            &project.rates,
            outer,
            inner,
            clamp,
        );

        result.total_windows += 1;
        result.total_area += est.area;
        result.outer_frame_weight += est.outer_weight;
        result.inner_frame_weight += est.inner_weight;
        result.total_weight += est.total_weight;
        result.grand_total += est.total_cost;
        result.aggregated_costs.accumulate(&est.costs);
        result.window_estimates.push((id.clone(), est));
    }

    if result.total_area > 0.0 {
        result.avg_cost_per_sqft = format!("{:.2}", result.grand_total / result.total_area);
    }
    if result.total_windows > 0 {
        result.avg_cost_per_window =
            format!("{:.2}", result.grand_total / result.total_windows as f64);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::cost::CostComponent;
    use crate::model::units::LengthUnit;
    use crate::model::window::GlassType;

    #[test]
    fn test_empty_project_yields_zero_sentinels() {
        let project = Project::new("site");
        let est = estimate_project(&project).unwrap();
        assert_eq!(est.total_windows, 0);
        assert!((est.total_area - 0.0).abs() < 1e-10);
        assert!((est.grand_total - 0.0).abs() < 1e-10);
        assert_eq!(est.avg_cost_per_sqft, "0.00");
        assert_eq!(est.avg_cost_per_window, "0.00");
        assert!(est.window_estimates.is_empty());
    }

    #[test]
    fn test_single_reference_window() {
        let mut project = Project::new("site");
        project.add_window();

        let est = estimate_project(&project).unwrap();
        assert_eq!(est.total_windows, 1);
        assert!((est.total_area - 16.0).abs() < 1e-10);
        assert!((est.outer_frame_weight - 3.296).abs() < 1e-10);
        assert!((est.inner_frame_weight - 4.488).abs() < 1e-10);
        assert!((est.total_weight - 9.144).abs() < 1e-10);
        assert!((est.grand_total - 6181.64).abs() < 1e-9);
        assert_eq!(est.avg_cost_per_window, "6181.64");
        // 6181.64 / 16
        assert_eq!(est.avg_cost_per_sqft, "386.35");
    }

    #[test]
    fn test_inch_dimensions_are_converted_before_pricing() {
        let mut feet = Project::new("feet");
        feet.add_window();

        let mut inches = Project::new("inches");
        let id = inches.add_window();
        {
            let win = inches.window_mut(&id).unwrap();
            win.unit = LengthUnit::Inches;
            win.width = 48.0;
            win.height = 48.0;
        }

        let a = estimate_project(&feet).unwrap();
        let b = estimate_project(&inches).unwrap();
        assert!((a.grand_total - b.grand_total).abs() < 1e-9);
    }

    #[test]
    fn test_aggregated_costs_sum_windows() {
        let mut project = Project::new("site");
        let id = project.add_window();
        project.add_window();
        {
            let win = project.window_mut(&id).unwrap();
            win.width = 6.0;
            win.glass = GlassType::Reflective;
            win.tracks = 3;
        }

        let est = estimate_project(&project).unwrap();
        assert_eq!(est.window_estimates.len(), 2);
        for c in CostComponent::ALL {
            let summed: f64 = est
                .window_estimates
                .iter()
                .map(|(_, w)| w.costs.component(c))
                .sum();
            assert!((est.aggregated_costs.component(c) - summed).abs() < 1e-9);
        }
        let expected_grand: f64 = est.window_estimates.iter().map(|(_, w)| w.total_cost).sum();
        assert!((est.grand_total - expected_grand).abs() < 1e-9);
    }

    #[test]
    fn test_stale_profile_reference_falls_back_to_first_entry() {
        let mut project = Project::new("site");
        let id = project.add_window();
        // Hand-built stale reference, bypassing delete_profile's re-pointing.
        project.window_mut(&id).unwrap().outer_profile = 7;

        let stale = estimate_project(&project).unwrap();
        project.window_mut(&id).unwrap().outer_profile = 0;
        let first = estimate_project(&project).unwrap();
        assert!((stale.grand_total - first.grand_total).abs() < 1e-10);
    }

    #[test]
    fn test_validation_error_propagates() {
        let mut project = Project::new("site");
        let id = project.add_window();
        project.window_mut(&id).unwrap().width = -1.0;
        assert!(matches!(
            estimate_project(&project).unwrap_err(),
            ValidationError::NonPositiveDimension { number: 1, .. }
        ));
    }

    #[test]
    fn test_estimates_follow_insertion_order() {
        let mut project = Project::new("site");
        let ids: Vec<_> = (0..4).map(|_| project.add_window()).collect();
        let est = estimate_project(&project).unwrap();
        let listed: Vec<_> = est.window_estimates.iter().map(|(id, _)| id.clone()).collect();
        assert_eq!(ids, listed);
    }
}
