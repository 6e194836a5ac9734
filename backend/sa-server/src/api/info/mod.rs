pub mod info;
pub mod info_response;
