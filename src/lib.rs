//! Mergington High School activity signup board, as a Yew single-page app.
//!
//! The page loads every activity from `GET /activities`, renders one card per
//! activity with its roster, and lets a visitor sign a student up or take one
//! off a roster. The in-memory [`board::Board`] only changes once the server
//! has confirmed a write.

pub mod actions;
pub mod api;
pub mod app;
pub mod board;
pub mod components;
pub mod config;
pub mod flash;
pub mod model;

pub use app::App;
