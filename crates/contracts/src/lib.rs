//! Shared wire-format contracts between the MSCT frontend and the graph API.
//!
//! Every type mirrors the JSON the backend emits field-for-field. Timestamps
//! stay ISO-8601 strings; raw graph nodes arrive as free-form property maps
//! and are kept as `serde_json::Value`.

pub mod domain;
