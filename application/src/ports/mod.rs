//! Ports (interfaces) for the application layer
//!
//! Ports define the boundaries between the application and infrastructure
//! layers. Adapters in the infrastructure layer implement these traits.

pub mod conversation_logger;
pub mod experiment_store;
pub mod model_gateway;
pub mod progress;
