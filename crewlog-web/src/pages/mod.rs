pub mod analysis;
pub mod console;
pub mod not_found;
pub mod setup;
