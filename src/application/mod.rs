// Application layer - Use cases and ports
pub mod copy_service;
pub mod superset_gateway;
