mod rest;

pub use rest::RestBackend;
