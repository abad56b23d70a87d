//! Domain models

pub mod animal;
pub mod enums;
pub mod farm;
pub mod herd;
pub mod owner;
pub mod personnel;
pub mod user;
