//! Page sections, in document order.

pub mod about;
pub mod contact;
pub mod hero;
pub mod portfolio;
pub mod services;
pub mod testimonials;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use portfolio::Portfolio;
pub use services::Services;
pub use testimonials::Testimonials;
