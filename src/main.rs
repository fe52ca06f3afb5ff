use anyhow::Result;
use windowcalc::{GlassType, LengthUnit, Project, estimate_project};

fn main() -> Result<()> {
    let mut project = Project::new("demo");

    let first = project.add_window();
    {
        let win = project.window_mut(&first)?;
        win.width = 6.0;
        win.height = 4.0;
        win.tracks = 3;
        win.glass = GlassType::Reflective;
    }

    let second = project.add_window();
    {
        let win = project.window_mut(&second)?;
        win.width = 48.0;
        win.height = 36.0;
        win.unit = LengthUnit::Inches;
    }

    let estimate = estimate_project(&project)?;

    for (pos, (_, win)) in estimate.window_estimates.iter().enumerate() {
        println!("Window {}", pos + 1);
        println!("  area:   {:.2} ft²", win.area);
        println!("  weight: {:.3} kg", win.total_weight);
        println!("  cost:   ₹{:.2}", win.total_cost);
    }

    println!();
    println!("Windows:             {}", estimate.total_windows);
    println!("Total area:          {:.2} ft²", estimate.total_area);
    println!("Total weight:        {:.3} kg", estimate.total_weight);
    println!("Grand total:         ₹{:.2}", estimate.grand_total);
    println!("Avg cost per ft²:    ₹{}", estimate.avg_cost_per_sqft);
    println!("Avg cost per window: ₹{}", estimate.avg_cost_per_window);

    Ok(())
}
