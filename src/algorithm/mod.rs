pub mod alphabet;
pub mod mod26;
