pub use super::location::Entity as Location;
