pub mod featured_items;
pub mod footer;
pub mod how_it_works;
pub mod location_section;
pub mod logo;
pub mod navbar;
pub mod roulette_wheel;
pub mod section_heading;
pub mod testimonials;
pub mod wheel_canvas;

pub use featured_items::FeaturedItems;
pub use footer::Footer;
pub use how_it_works::HowItWorks;
pub use location_section::LocationSection;
pub use logo::Logo;
pub use navbar::Navbar;
pub use roulette_wheel::RouletteWheel;
pub use section_heading::SectionHeading;
pub use testimonials::Testimonials;
pub use wheel_canvas::WheelCanvas;
