pub mod controller;
pub mod directory;
pub mod model;
pub mod router;
pub mod service;
