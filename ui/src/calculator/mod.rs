pub mod model;
pub mod view;

pub use model::{project, RoiInputs, RoiProjection, SUBSCRIPTION_REF};
pub use view::RoiCalculator;
