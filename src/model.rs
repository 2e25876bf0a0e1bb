mod account;
mod autoconf;
mod bucket;
mod lead;
mod webhook;

pub use self::account::*;
pub use self::autoconf::*;
pub use self::bucket::*;
pub use self::lead::*;
pub use self::webhook::*;
