mod chat;
mod login;
mod register;

pub use chat::Chat;
pub use login::Login;
pub use register::Register;
