mod numeric;
mod registry;

pub use numeric::*;
pub use registry::*;
