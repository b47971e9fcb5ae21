pub mod csv;
pub mod currency;
pub mod json;
