pub mod delivery;
pub mod home;
pub mod reservation;
