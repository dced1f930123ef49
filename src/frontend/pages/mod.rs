//! Page components for the Inmobiliaria Mendoza frontend

mod landing;
mod login;
mod not_found;
mod properties;

pub use landing::LandingPage;
pub use login::LoginPage;
pub use not_found::NotFound;
pub use properties::PropertiesPage;
