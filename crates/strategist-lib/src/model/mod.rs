pub mod outline_request;
pub mod outline_response;
