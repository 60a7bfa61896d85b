#![allow(ambiguous_glob_reexports)]

pub mod accept_ownership;
pub mod initialize;
pub mod receive_native_payment;
pub mod receive_payment;
pub mod recover_stranded_native;
pub mod recover_stranded_tokens;
pub mod supports_distribution_interface;
pub mod transfer_ownership;
pub mod update_operator;
pub mod update_rate_table;
pub mod update_settlement_addresses;
pub mod view_operator;
pub mod view_rate_table;

pub use accept_ownership::*;
pub use initialize::*;
pub use receive_native_payment::*;
pub use receive_payment::*;
pub use recover_stranded_native::*;
pub use recover_stranded_tokens::*;
pub use supports_distribution_interface::*;
pub use transfer_ownership::*;
pub use update_operator::*;
pub use update_rate_table::*;
pub use update_settlement_addresses::*;
pub use view_operator::*;
pub use view_rate_table::*;
