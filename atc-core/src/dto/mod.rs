//! Data Transfer Objects
//!
//! Request bodies sent to the ATC API.

pub mod pipeline;
