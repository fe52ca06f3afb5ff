pub mod estimate;
pub mod io;
pub mod model;
mod uid;

// Prelude
pub use estimate::cost::{CostBreakdown, CostComponent, WindowEstimate, estimate_window};
pub use estimate::project::{ProjectEstimate, estimate_project};
pub use estimate::validate::{ValidationError, validate_project};
pub use model::profile::{Profile, ProfileCatalog, ProfileKind};
pub use model::project::Project;
pub use model::rates::RateTable;
pub use model::units::{LengthUnit, to_feet};
pub use model::window::{GlassType, Window};
pub use uid::WindowId;
