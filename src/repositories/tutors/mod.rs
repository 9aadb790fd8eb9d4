pub mod tutor_repo;

pub use tutor_repo::*;
