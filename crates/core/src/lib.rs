//! Core library for streams
//!
//! This crate implements the **Functional Core** of the streams application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`streams_core`** (this crate): transformations over the sample name
//!   list and the static endpoint catalog, with zero I/O
//! - **`streams`**: the CLI and the HTTP server (the Imperative Shell)
//!
//! Everything here is a plain function over plain data. The one exception is
//! [`names::NameOperations::generate_identifier`], which reads the OS random
//! source.
//!
//! # Module Organization
//!
//! - [`names`]: map, filter, predicate, supplier, consumer, unary and binary
//!   operations over the name list
//! - [`catalog`]: per-route documentation served by the index route
//!
//! # Example Usage
//!
//! ```rust
//! use streams_core::names::NameOperations;
//!
//! let ops = NameOperations::default();
//!
//! assert_eq!(ops.filter_by_starting_letter("S"), vec!["Sophia", "Scarlett"]);
//! assert_eq!(ops.double(10), 20);
//! assert_eq!(ops.sum(&[5, 3, 7]), 15);
//! ```

pub mod catalog;
pub mod names;
