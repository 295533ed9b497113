pub mod reduce;
pub mod version;
