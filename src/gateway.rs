pub mod factory;
pub mod openlibrary;
pub mod provider;
