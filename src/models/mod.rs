pub mod add_on;
pub mod booking;
pub mod service;
pub mod stylist;
