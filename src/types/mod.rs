mod ids;
mod properties;
mod refs;
mod values;

pub use ids::*;
pub use properties::*;
pub use refs::*;
pub use values::*;
