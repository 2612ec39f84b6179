pub mod cart;
pub mod catalog;
pub mod constants;
pub mod reservation;
pub mod spin_wheel;
pub mod validation;
