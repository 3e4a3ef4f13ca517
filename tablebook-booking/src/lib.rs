pub mod assignment;
pub mod conflict;
pub mod coordinator;
pub mod session;

pub use coordinator::BookingCoordinator;
pub use session::SharedBookingSystem;
