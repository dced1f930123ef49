//! Reusable UI components for the Inmobiliaria Mendoza frontend

mod alert;
mod button;
mod footer;
mod input;
mod nav;
mod property_card;

pub use alert::{AlertBanner, AlertStack};
pub use button::SubmitButton;
pub use footer::Footer;
pub use input::{FormInput, PasswordInput};
pub use nav::{LOGO_SRC, Nav};
pub use property_card::PropertyCard;
