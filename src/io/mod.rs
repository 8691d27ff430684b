pub mod decrypting;
pub mod encrypting;
pub mod inspecting;
