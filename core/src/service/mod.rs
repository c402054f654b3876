pub mod aggregate;
pub mod binning;
pub mod window;
