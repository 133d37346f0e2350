// Travily utility functions.

pub mod budget;
