pub mod registration_api;

pub use registration_api::{HttpRegistrationGateway, RegistrationApiError};
