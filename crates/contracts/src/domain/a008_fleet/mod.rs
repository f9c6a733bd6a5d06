pub mod aggregate;

pub use aggregate::{trips_on, Bus, BusTrip, Driver, TripKind, TripStatus};
