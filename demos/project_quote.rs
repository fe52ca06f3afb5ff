//! Builds a three-window project, prints a full quote and saves it to JSON.

use anyhow::Result;
use windowcalc::io::write_project;
use windowcalc::{GlassType, LengthUnit, Project, ProfileKind, estimate_project};

fn build_project() -> Result<Project> {
    let mut project = Project::new("residence_ground_floor");

    // Living room: large reflective 3-track window in the heavier section.
    let living = project.add_window();
    {
        let win = project.window_mut(&living)?;
        win.width = 8.0;
        win.height = 5.0;
        win.tracks = 3;
        win.glass = GlassType::Reflective;
        win.outer_profile = 1;
        win.inner_profile = 1;
        win.clamp_profile = 1;
    }

    // Bedroom: standard 4x4 clear window, defaults are fine.
    project.add_window();

    // Kitchen: entered in inches.
    let kitchen = project.add_window();
    {
        let win = project.window_mut(&kitchen)?;
        win.width = 54.0;
        win.height = 42.0;
        win.unit = LengthUnit::Inches;
    }

    Ok(project)
}

fn main() -> Result<()> {
    let mut project = build_project()?;

    // Site-specific adjustments to the shared rates.
    project.rates.labor_rate = 55.0;
    project.rates.other_charges_rate = 7.5;

    // A custom heavy-duty outer section for this site.
    let idx = project.add_profile(ProfileKind::Outer);
    {
        let p = project.profile_mut(ProfileKind::Outer, idx)?;
        p.label = "1.5mm".to_string();
        p.thickness_mm = 1.5;
        p.weight_per_ft = 0.283;
        p.rate_per_kg = 345.0;
    }

    let estimate = estimate_project(&project)?;

    println!("Quote: {}", project.name);
    println!("{}", "-".repeat(44));
    for (pos, (_, win)) in estimate.window_estimates.iter().enumerate() {
        println!(
            "Window {}: {:.2} ft², {:.3} kg, ₹{:.2}",
            pos + 1,
            win.area,
            win.total_weight,
            win.total_cost
        );
    }
    println!("{}", "-".repeat(44));
    for (component, value) in estimate.aggregated_costs.iter() {
        println!("{:<16} ₹{:>10.2}", component.label(), value);
    }
    println!("{}", "-".repeat(44));
    println!("{:<16} ₹{:>10.2}", "Grand Total", estimate.grand_total);
    println!("Avg per ft²:    ₹{}", estimate.avg_cost_per_sqft);
    println!("Avg per window: ₹{}", estimate.avg_cost_per_window);

    let path = std::path::Path::new("residence_ground_floor.json");
    write_project(path, &project)?;
    println!("Saved project to {}", path.display());

    Ok(())
}
