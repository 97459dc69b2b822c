//! Domain model: action codes, arguments, inbound messages and errors.

pub mod args;
pub mod code;
pub mod errors;
pub mod message;

pub use self::args::ActionArgs;
pub use self::code::ActionCode;
pub use self::errors::{
    ActionError, CodeError, DispatchError, LookupError, RegistryError,
};
pub use self::message::ActionMessage;
