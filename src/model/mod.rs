//! Typed model of TJS 1.0 documents
//!
//! Mirrors the complex and simple types of the TJS 1.0 XML schema. EMF-style
//! numbered near-duplicates in the schema (Framework1..4Type, Dataset
//! variants, the two Rowset shapes) collapse into single structs with
//! optional parts; per-document completeness rules live in
//! [`crate::validation`].

pub mod capabilities;
pub mod common;
pub mod framework;
pub mod join;
pub mod ows;
pub mod request;

pub use capabilities::*;
pub use common::*;
pub use framework::*;
pub use join::*;
pub use ows::*;
pub use request::*;
