pub mod tutor;
pub mod choices;

pub use tutor::*;
pub use choices::*;
