pub mod api_response;
pub mod auth_dto;
pub mod package_dto;
pub mod route_dto;

pub use api_response::ApiResponse;
