/// JSON interoperability.
///
/// Converts between [`Value`](core::Value) and `serde_json::Value`, so that
/// contexts can be loaded from JSON documents and results can be written back
/// out as JSON.
pub mod json;

pub mod core;
