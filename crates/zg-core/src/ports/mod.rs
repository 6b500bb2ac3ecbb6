//! Outbound ports of the signup flow.
//!
//! The HTTP client and the navigation sink are injected collaborators; the
//! domain and application layers only ever see these traits.

pub mod navigator;
pub mod registration_gateway;

pub use navigator::NavigatorPort;
pub use registration_gateway::RegistrationGatewayPort;
