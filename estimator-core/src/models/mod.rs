mod compiled_data;
mod estimate;
mod extras;
mod point;
mod system;
mod tasks;

pub use compiled_data::{CompiledData, ProjectDetails};
pub use estimate::Estimate;
pub use extras::{ExtraFlag, Extras};
pub use point::PointRecord;
pub use system::SystemRecord;
pub use tasks::{TaskFlag, Tasks};
