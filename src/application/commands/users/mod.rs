mod login;
mod modify;
mod register;
mod role;
mod service;
pub mod validation;
mod withdraw;

pub use login::{LoginCommand, LoginResult};
pub use modify::ModifyProfileCommand;
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
