pub mod services;

pub use services::{AvailabilityService, BookingService, LifecycleService};
