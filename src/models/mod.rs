// Re-export all model types
pub use self::booking::*;
pub use self::enums::*;
pub use self::errors::*;
pub use self::form::*;
pub use self::gallery::*;
pub use self::menu::*;
pub use self::special::*;
pub use self::testimonial::*;
pub use self::validation::*;

mod booking;
mod enums;
mod errors;
mod form;
mod gallery;
mod menu;
mod special;
mod testimonial;
mod validation;
