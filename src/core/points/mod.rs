mod point;
mod region;

pub use point::{CENTER, ClassifiedPoint, Point, RADIUS};
pub use region::Region;
