//! Word subdomain: records from a word-lookup service and the adjective filter.

pub mod filter;
pub mod record;
