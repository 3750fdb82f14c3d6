multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Client fee configuration — fixed at registration
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ClientFeeConfig<M: ManagedTypeApi> {
    /// Recipient share of every fee payment, as numerator over
    /// `denominator`. The rest accrues to the team pot.
    pub recipient_numerator: BigUint<M>,
    pub denominator: BigUint<M>,
    /// 1 to 4 unique recipient addresses splitting the recipient
    /// share equally.
    pub recipients: ManagedVec<M, ManagedAddress<M>>,
}
