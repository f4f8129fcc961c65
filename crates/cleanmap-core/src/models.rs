pub mod coordinates;
pub mod distance;
pub mod location;

pub use coordinates::{Coordinates, Located};
pub use distance::{Distance, DistanceUnit, ValidityMode};
pub use location::{PollutedLocation, Severity};
