//! Services organized by domain concern.

pub mod clock;
pub mod id_generator;
pub mod user_service;

pub use clock::{Clock, SystemClock};
pub use id_generator::{IdGenerator, TimeUuidGenerator};
pub use user_service::UserService;
