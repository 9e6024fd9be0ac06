//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by the request handler: content-type
//! inference and status response builders.

pub mod mime;
pub mod response;

pub use response::{
    build_404_response, build_405_response, build_500_response, build_file_response,
    build_options_response,
};
