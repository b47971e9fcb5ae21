pub mod catalog;
pub mod invoice;
pub mod money;
pub mod play;
pub mod ports;
pub mod pricing;
