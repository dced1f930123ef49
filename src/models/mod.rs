pub use property::*;

mod property;
