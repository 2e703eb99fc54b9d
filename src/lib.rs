pub mod app;
pub mod auth;
pub mod bookings;
pub mod config;
pub mod listings;
pub mod reviews;
pub mod seed;
pub mod state;
