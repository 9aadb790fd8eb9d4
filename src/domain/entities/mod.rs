pub mod tutors;
pub mod zoom;

pub use tutors::*;
pub use zoom::*;
