//! Request extractors that answer rejections in the API's error shape.

mod json;

pub use json::{AppJson, AppQuery};
