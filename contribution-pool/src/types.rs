multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Pool State — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum PoolState {
    /// Accepting deposits, withdrawals, quota and whitelist changes.
    Open,
    /// Creator aborted before payout. Terminal; everything is
    /// withdrawable in full.
    Failed,
    /// Pool total forwarded to the presale. Contributions are frozen
    /// and serve as refund/token weights.
    Paid,
    /// A refund source has been designated; inbound refunds accrue
    /// to the refund pot.
    RefundPending,
}

// ============================================================
// Participant record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Participant<M: ManagedTypeApi> {
    /// Committed balance, counted toward the pool total and quota
    /// limits. Frozen once the pool is paid.
    pub contribution: BigUint<M>,
    /// Custodied but uncommitted balance. Withdrawable at any time
    /// the participant exits.
    pub remaining: BigUint<M>,
    /// Explicit whitelist flag; only consulted while the pool is
    /// restricted.
    pub whitelisted: bool,
}
