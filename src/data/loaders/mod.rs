// mod.rs - Delimited-text loaders

pub mod csv;

pub use self::csv::delimiter_for_path;
