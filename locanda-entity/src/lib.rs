pub mod location;
pub mod prelude;

pub use location::Entity as Location;
