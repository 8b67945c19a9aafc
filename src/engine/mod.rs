mod converter;
mod errors;

pub use converter::Converter;
