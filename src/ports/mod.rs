//! Interface seams between the core and its collaborators

pub mod observer;
pub mod provider;

pub use observer::Observer;
pub use provider::MoveProvider;
