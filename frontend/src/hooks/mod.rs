pub mod use_cart;
pub mod use_spin_wheel;

pub use use_cart::*;
pub use use_spin_wheel::*;
