//! apimocker
//!
//! A lightweight mock REST API server driven by a declarative YAML or
//! JSON configuration. Each endpoint serves generated JSON records, a
//! static file, or a simulated failure.
//!
//! # Features
//!
//! - **Synthetic Data**: Generate records from a field-name to type-tag schema
//! - **Query Shaping**: Filter, sort, and paginate responses, with an optional metadata envelope
//! - **Authentication**: Basic and Bearer checks per endpoint
//! - **Latency Simulation**: Fixed delays such as "500ms" or "1m30s"
//! - **Failure Injection**: Probabilistic error responses per endpoint
//! - **Request Logging**: Plain or JSON lines to stdout or a file
//!
//! # Example Configuration
//!
//! ```yaml
//! port: 5050
//! endpoints:
//!   - path: /users
//!     method: GET
//!     count: 3
//!     data: |
//!       {"id": "uuid", "name": "name", "email": "email"}
//! logging:
//!   enabled: true
//!   format: plain
//!   output: stdout
//! ```

pub mod auth;
pub mod config;
pub mod fault;
pub mod generator;
pub mod logger;
pub mod query;
pub mod server;

pub use config::Config;
pub use logger::RequestLogger;
