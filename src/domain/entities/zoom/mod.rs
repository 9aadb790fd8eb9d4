pub mod zoom_credentials;

pub use zoom_credentials::*;
