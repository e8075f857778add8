//! Thin HTTP clients for the two remote data sources BioOpti can draw
//! kinetic and culture data from: the SABIO-RK reaction-kinetics database
//! and the DSMZ BACdive strain database.
//!
//! Both clients only fetch and extract; deciding what to do with incomplete
//! results (prompt, substitute, abort) stays with the command layer.

pub mod bacdive;
pub mod sabio;
