//! Ticket Service - Ticket purchase validation and fulfilment
//!
//! This crate checks a ticket purchase against the venue's purchase rules,
//! works out how many seats to reserve and how much to charge, and then
//! drives the seat reservation and payment services.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
