use std::fmt;

use crate::models::messages::BuildRequest;

use super::RouterError;

/// Encodes a parameter tuple into calldata for one fixed contract function.
pub type CallEncoder<P> = fn(&P) -> Vec<u8>;

/// Result of compiling a route: the call encoder, the parameters it will be fed
/// and the network fee accrued by the route, as a decimal string.
#[derive(Clone)]
pub struct TxInfo<P> {
    pub encoder: CallEncoder<P>,
    pub params: P,
    pub network_fee: String,
}

impl<P> TxInfo<P> {
    pub fn calldata(&self) -> Vec<u8> {
        (self.encoder)(&self.params)
    }
}

impl<P: fmt::Debug> fmt::Debug for TxInfo<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TxInfo")
            .field("params", &self.params)
            .field("network_fee", &self.network_fee)
            .finish_non_exhaustive()
    }
}

/// A call compiler for one settlement contract entry point.
pub trait Router {
    type Param;

    fn contract_method_name(&self) -> &'static str;

    fn build(&self, request: &BuildRequest) -> Result<TxInfo<Self::Param>, RouterError>;
}
