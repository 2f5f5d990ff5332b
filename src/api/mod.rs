//! API Module
//!
//! HTTP handlers and routing exposing the cache over REST.
//!
//! # Endpoints
//! - `PUT /set` - Store a key-value pair
//! - `GET /get/:key` - Retrieve a value by key
//! - `GET /has/:key` - Check whether a key is live
//! - `DELETE /del/:key` - Delete a key
//! - `DELETE /clear` - Drop every entry
//! - `POST /invalidate` - Delete every key matching a glob
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
