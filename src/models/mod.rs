pub mod request_model;
pub mod response_model;
