//! Data model for plants, cells and in-flight transport.

pub mod cell;
pub mod event;
pub mod genome;
pub mod geometry;
pub mod plant;
pub mod transport;
pub mod view;
