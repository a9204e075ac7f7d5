//! ATC Core
//!
//! Core types shared by the ATC pipeline client and CLI.
//!
//! This crate contains:
//! - Domain types: values returned by the server (Pipeline, GroupConfig)
//! - DTOs: request bodies sent to the server

pub mod domain;
pub mod dto;
