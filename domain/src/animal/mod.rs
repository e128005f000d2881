//! Animal subdomain: the built-in, per-letter animal catalog.

pub mod catalog;
