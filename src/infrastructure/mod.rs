// Infrastructure layer module
// Contains storage adapters for the domain repository ports

pub mod repositories;
