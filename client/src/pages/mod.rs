//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, network calls,
//! navigation) and delegates rendering details to `components`.

pub mod landing;
pub mod response;
