//! Feature-Handler: mutieren den AppState im Auftrag des Controllers.

pub mod markers;
pub mod session;
