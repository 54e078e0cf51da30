//! German railway station browser.
//!
//! A web application over the DB station data and facility status APIs:
//! a filterable, paged station list and per-station detail pages with
//! live elevator and escalator status.

pub mod cache;
pub mod config;
pub mod domain;
pub mod fasta;
pub mod listing;
pub mod map;
pub mod stada;
pub mod upstream;
pub mod web;
