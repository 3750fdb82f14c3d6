#![no_std]

multiversx_sc::imports!();

// ============================================================
// Proportional ledger module
//
// Tracks money (or tokens) flowing into a "pot" and pays each
// claimant floor(total * weight / weight_total) minus whatever
// they already claimed. Pots are keyed by an opaque buffer so
// one contract can run several of them side by side.
//
// Totals only ever grow. Claims are committed to storage before
// the caller performs the external transfer, so a reentrant
// call sees the claim as already taken.
// ============================================================

#[multiversx_sc::module]
pub trait ProportionalLedgerModule {
    // ========================================================
    // Intake
    // ========================================================

    /// Credits a known inflow to the pot.
    fn ledger_register(&self, pot: &ManagedBuffer, amount: &BigUint) {
        if *amount > 0u64 {
            self.ledger_total_received(pot).update(|t| *t += amount);
        }
    }

    /// Raises the pot total to an externally observed cumulative
    /// amount (current balance plus everything already paid out).
    /// Lower observations are ignored so the total stays monotone.
    fn ledger_sync_observed(&self, pot: &ManagedBuffer, observed_total: &BigUint) {
        let mapper = self.ledger_total_received(pot);
        if *observed_total > mapper.get() {
            mapper.set(observed_total);
        }
    }

    // ========================================================
    // Claims
    // ========================================================

    /// Matured, unclaimed share for one claimant. Zero for excluded
    /// claimants and whenever the weight total is zero.
    fn ledger_entitlement(
        &self,
        pot: &ManagedBuffer,
        claimant: &ManagedAddress,
        weight: &BigUint,
        weight_total: &BigUint,
    ) -> BigUint {
        if *weight_total == 0u64 || self.ledger_excluded(pot).contains(claimant) {
            return BigUint::zero();
        }
        let total = self.ledger_total_received(pot).get();
        let share = (&total * weight) / weight_total;
        let claimed = self.ledger_claimed(pot, claimant).get();
        if share > claimed {
            share - claimed
        } else {
            BigUint::zero()
        }
    }

    /// Commits the claimant's entitlement and returns the amount to
    /// pay. Callers must transfer only after this has run.
    fn ledger_settle(
        &self,
        pot: &ManagedBuffer,
        claimant: &ManagedAddress,
        weight: &BigUint,
        weight_total: &BigUint,
    ) -> BigUint {
        let due = self.ledger_entitlement(pot, claimant, weight, weight_total);
        if due > 0u64 {
            self.ledger_claimed(pot, claimant).update(|c| *c += &due);
        }
        due
    }

    // ========================================================
    // Exclusion
    // ========================================================

    /// Excluded claimants settle to zero; their slice of the pot is
    /// never reassigned to anyone else.
    fn ledger_exclude(&self, pot: &ManagedBuffer, claimant: &ManagedAddress) {
        self.ledger_excluded(pot).insert(claimant.clone());
    }

    fn ledger_include(&self, pot: &ManagedBuffer, claimant: &ManagedAddress) {
        self.ledger_excluded(pot).swap_remove(claimant);
    }

    // ========================================================
    // Storage
    // ========================================================

    #[storage_mapper("ledgerTotalReceived")]
    fn ledger_total_received(&self, pot: &ManagedBuffer) -> SingleValueMapper<BigUint>;

    #[storage_mapper("ledgerClaimed")]
    fn ledger_claimed(
        &self,
        pot: &ManagedBuffer,
        claimant: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("ledgerExcluded")]
    fn ledger_excluded(&self, pot: &ManagedBuffer) -> UnorderedSetMapper<ManagedAddress>;
}
