// mod.rs - File loaders

pub mod tsv;
