pub mod cipher;
pub mod key;
pub mod matrix;
