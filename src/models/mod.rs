pub mod gas;
pub mod payment;
pub mod wallet;

pub use gas::*;
pub use payment::*;
pub use wallet::*;
