//! Page-scoped state for the upload form and the results view.
//!
//! DESIGN
//! ======
//! State types are plain data with transition methods; pages wrap them in
//! `RwSignal`s. Keeping transitions here lets the form gate and the results
//! data-source rules be tested without a browser.

pub mod results;
pub mod upload;
