//! Interactive prompts that drive the address book.

mod interactive;

pub use interactive::{ActionOutcome, FindOutcome, Session, ASSISTANCE_MESSAGE};
