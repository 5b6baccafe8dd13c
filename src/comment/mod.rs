pub mod controller;
pub mod index;
pub mod mapper;
pub mod memory;
pub mod model;
pub mod service;
