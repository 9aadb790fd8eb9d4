pub mod zoom_oauth_service;

pub use zoom_oauth_service::*;
