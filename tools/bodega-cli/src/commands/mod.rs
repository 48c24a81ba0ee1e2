//! CLI subcommands.

pub mod add;
pub mod checkout;
pub mod clear;
pub mod contact;
pub mod dec;
pub mod inc;
pub mod remove;
pub mod show;

pub use add::AddArgs;
pub use checkout::CheckoutArgs;
pub use clear::ClearArgs;
pub use contact::ContactArgs;
pub use dec::DecArgs;
pub use inc::IncArgs;
pub use remove::RemoveArgs;
pub use show::ShowArgs;
