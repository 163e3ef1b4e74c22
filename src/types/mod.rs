mod usd;

pub use usd::format_usd;

pub type ConfirmationCode = String;
pub type LineNumber = u64;
