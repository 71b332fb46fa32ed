pub mod shift;
pub mod window;
