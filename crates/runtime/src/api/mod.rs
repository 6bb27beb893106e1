//! Public runtime API surface.
//!
//! Types handed to transport layers: the service error and the player views
//! returned after each operation.

pub mod errors;
pub mod view;

pub use errors::{Result, ServiceError};
pub use view::{Applied, PlayerHpView};
