pub mod clock;
pub mod compute;
pub mod config;
pub mod controller;
pub mod entities;
pub mod error;
pub mod input;
pub mod view;
