//! Application services
//!
//! The reservation core: availability checking, lifecycle management and
//! booking orchestration. Services hold the repository provider and contain
//! all domain logic; repositories stay dumb.

pub mod availability;
pub mod booking;
pub mod lifecycle;

pub use availability::AvailabilityService;
pub use booking::BookingService;
pub use lifecycle::LifecycleService;
