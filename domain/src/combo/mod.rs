//! Combo subdomain: pairing shuffled adjectives with shuffled animals.

pub mod generator;
pub mod value_objects;
