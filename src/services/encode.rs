pub mod abi;
mod allocation;
mod error;
mod exchanges;
pub mod identifier;
pub mod multiswap;
pub mod payload;
pub mod router;
#[cfg(test)]
mod test_support;
pub mod wire;

pub use error::{RouterError, RouterErrorKind};
pub use multiswap::{validate_route_shape, MultiSwap, MultiSwapParam};
pub use payload::{ContractPaths, PayloadEncoder};
pub use router::{CallEncoder, Router, TxInfo};
