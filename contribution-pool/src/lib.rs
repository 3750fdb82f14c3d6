#![no_std]

multiversx_sc::imports!();

pub mod contribution_pool_proxy;
pub mod fee_manager_proxy;
pub mod types;

use types::{Participant, PoolState};

// ============================================================
// Constants
// ============================================================

/// EGLD denomination
const ONE_EGLD: u64 = 1_000_000_000_000_000_000;

/// Quota settings are capped at 10^9 EGLD so share arithmetic
/// can never overflow
const SETTING_CEILING_EGLD_POW: u32 = 27;

/// Presale refunds accrue here, weighted by contribution
const POT_REFUND: &[u8] = b"refund";

/// Purchased tokens accrue here, weighted by contribution
const POT_TOKEN: &[u8] = b"token";

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait ContributionPool: proportional_ledger::ProportionalLedgerModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// Any EGLD attached to the deployment counts as a creator
    /// deposit. A non-zero fee rate registers the pool with the
    /// fee manager, which doubles as a compatibility probe on
    /// the given address.
    #[init]
    #[payable("EGLD")]
    fn init(
        &self,
        fee_manager: ManagedAddress,
        fees_per_ether: BigUint,
        min_contribution: BigUint,
        max_contribution: BigUint,
        max_pool_balance: BigUint,
        restricted: bool,
        admins: MultiValueEncoded<ManagedAddress>,
    ) {
        let creator = self.blockchain().get_caller();
        self.creator().set(&creator);

        self.validate_settings(&min_contribution, &max_contribution, &max_pool_balance);
        self.min_contribution().set(&min_contribution);
        self.max_contribution().set(&max_contribution);
        self.max_pool_balance().set(&max_pool_balance);

        require!(
            fees_per_ether < BigUint::from(ONE_EGLD) / 2u64,
            "Fee rate too high"
        );
        self.fees_per_ether().set(&fees_per_ether);
        self.fee_manager_address().set(&fee_manager);

        self.state().set(PoolState::Open);
        self.restricted().set(restricted);

        self.add_to_whitelist(&creator);
        for admin in admins {
            self.add_to_whitelist(&admin);
            self.admins().insert(admin);
        }

        if fees_per_ether > 0u64 {
            let mut recipients = MultiValueEncoded::new();
            recipients.push(creator.clone());
            self.tx()
                .to(&fee_manager)
                .typed(fee_manager_proxy::FeeManagerProxy)
                .create(&fees_per_ether, recipients)
                .sync_call();
        }

        let payment = self.call_value().egld_value().clone_value();
        if payment > 0u64 {
            self.credit_deposit(&creator, &payment);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: deposit
    // The payment is split into what fits under the personal
    // and pool caps (contribution) and the rest (remaining).
    // ========================================================

    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self) {
        self.require_open();
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();
        require!(payment > 0u64, "No deposit payment");
        self.credit_deposit(&caller, &payment);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Partial exit. Uncommitted funds leave first; whatever is
    // debited from the contribution must leave it at zero or
    // above the minimum.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) {
        self.require_open();
        let caller = self.blockchain().get_caller();
        require!(!self.participants(&caller).is_empty(), "Unknown participant");

        let mut participant = self.participants(&caller).get();
        require!(amount > 0u64, "Invalid amount");
        require!(
            amount <= &participant.contribution + &participant.remaining,
            "Insufficient balance"
        );
        require!(
            amount >= participant.remaining,
            "Must withdraw uncommitted balance first"
        );

        let debit = &amount - &participant.remaining;
        let new_contribution = &participant.contribution - &debit;
        require!(
            new_contribution == 0u64 || new_contribution >= self.min_contribution().get(),
            "Contribution below minimum"
        );

        participant.remaining = BigUint::zero();
        participant.contribution = new_contribution;
        self.pool_contribution_balance().update(|t| *t -= &debit);
        self.participants(&caller).set(&participant);

        self.send().direct_egld(&caller, &amount);
        self.withdraw_event(&caller, &amount);
    }

    // ========================================================
    // ENDPOINT: withdrawAll
    // Full exit. Before payout: everything. After payout: the
    // uncommitted balance plus any matured refund share; the
    // contribution record stays as the refund/token weight.
    // ========================================================

    #[endpoint(withdrawAll)]
    fn withdraw_all(&self) {
        let caller = self.blockchain().get_caller();
        if self.participants(&caller).is_empty() {
            return;
        }
        let mut participant = self.participants(&caller).get();

        let payout = match self.state().get() {
            PoolState::Open | PoolState::Failed => {
                let total = &participant.contribution + &participant.remaining;
                self.pool_contribution_balance()
                    .update(|t| *t -= &participant.contribution);
                participant.contribution = BigUint::zero();
                participant.remaining = BigUint::zero();
                total
            }
            PoolState::Paid | PoolState::RefundPending => {
                let refund_due = self.ledger_settle(
                    &ManagedBuffer::from(POT_REFUND),
                    &caller,
                    &participant.contribution,
                    &self.pool_contribution_balance().get(),
                );
                let total = &refund_due + &participant.remaining;
                participant.remaining = BigUint::zero();
                total
            }
        };
        self.participants(&caller).set(&participant);

        if payout > 0u64 {
            self.send().direct_egld(&caller, &payout);
            self.withdraw_event(&caller, &payout);
        }
    }

    // ========================================================
    // ENDPOINT: setContributionSettings
    // Quota change plus list-driven rebalancing. Only the
    // listed identifiers are touched; everyone else keeps a
    // possibly stale split until a later call names them.
    // ========================================================

    #[endpoint(setContributionSettings)]
    fn set_contribution_settings(
        &self,
        min_contribution: BigUint,
        max_contribution: BigUint,
        max_pool_balance: BigUint,
        rebalance: MultiValueEncoded<ManagedAddress>,
    ) {
        self.require_creator_or_admin();
        self.require_open();
        self.validate_settings(&min_contribution, &max_contribution, &max_pool_balance);

        self.min_contribution().set(&min_contribution);
        self.max_contribution().set(&max_contribution);
        self.max_pool_balance().set(&max_pool_balance);
        self.settings_changed_event(&min_contribution, &max_contribution, &max_pool_balance);

        for address in rebalance {
            self.rebalance_participant(&address);
        }
    }

    // ========================================================
    // ENDPOINT: modifyWhitelist
    // Turns restriction on. Removal releases the committed
    // balance back to the participant's uncommitted funds and
    // bars them from future pots. Re-adding restores
    // eligibility only; the contribution comes back through a
    // later settings call naming the identifier.
    // ========================================================

    #[endpoint(modifyWhitelist)]
    fn modify_whitelist(
        &self,
        add: ManagedVec<ManagedAddress>,
        remove: ManagedVec<ManagedAddress>,
    ) {
        self.require_creator();
        self.require_open();
        self.restricted().set(true);

        let refund_pot = ManagedBuffer::from(POT_REFUND);
        let token_pot = ManagedBuffer::from(POT_TOKEN);

        for address in &remove {
            let mut participant = self.get_or_create_participant(&address);
            participant.whitelisted = false;
            if participant.contribution > 0u64 {
                self.pool_contribution_balance()
                    .update(|t| *t -= &participant.contribution);
                let released = participant.contribution.clone();
                participant.remaining += &released;
                participant.contribution = BigUint::zero();
            }
            self.participants(&address).set(&participant);
            self.ledger_exclude(&refund_pot, &address);
            self.ledger_exclude(&token_pot, &address);
            self.whitelist_removed_event(&address);
        }

        for address in &add {
            let mut participant = self.get_or_create_participant(&address);
            participant.whitelisted = true;
            self.participants(&address).set(&participant);
            self.ledger_include(&refund_pot, &address);
            self.ledger_include(&token_pot, &address);
            self.whitelist_added_event(&address);
        }
    }

    /// Lifts the restriction entirely; every identifier is eligible
    /// again. Contribution restore stays list-driven.
    #[endpoint(removeWhitelist)]
    fn remove_whitelist(&self) {
        self.require_creator();
        self.require_open();
        self.restricted().set(false);
        self.whitelist_disabled_event();
    }

    // ========================================================
    // ENDPOINT: fail
    // ========================================================

    #[endpoint(fail)]
    fn fail(&self) {
        self.require_creator();
        self.require_open();
        self.state().set(PoolState::Failed);
        self.pool_failed_event();
    }

    // ========================================================
    // ENDPOINT: payToPresale
    // One-shot. The fee is retained in custody; the rest of the
    // pool total goes out in a single transfer. Uncommitted
    // balances stay withdrawable.
    // ========================================================

    #[endpoint(payToPresale)]
    fn pay_to_presale(&self, presale: ManagedAddress, min_pool_total: BigUint) {
        self.require_creator();
        self.require_open();

        let pool_total = self.pool_contribution_balance().get();
        require!(pool_total > 0u64, "Empty pool");
        require!(pool_total >= min_pool_total, "Pool balance below minimum");

        let fee = (&pool_total * &self.fees_per_ether().get()) / &BigUint::from(ONE_EGLD);
        self.total_fees().set(&fee);
        self.state().set(PoolState::Paid);

        let payout = &pool_total - &fee;
        self.send().direct_egld(&presale, &payout);
        self.pool_paid_event(&presale, &payout, &fee);
    }

    // ========================================================
    // ENDPOINT: setToken
    // ========================================================

    #[endpoint(setToken)]
    fn set_token(&self, token: TokenIdentifier, allow_claiming: bool) {
        self.require_creator();
        let state = self.state().get();
        require!(
            state == PoolState::Open || state == PoolState::Paid,
            "Invalid pool state"
        );
        require!(
            !self.token_claims_started().get(),
            "Token claiming already started"
        );
        require!(token.is_valid_esdt_identifier(), "Invalid token");

        self.token_set_event(&token, allow_claiming);
        self.token_id().set(&token);
        self.allow_token_claiming().set(allow_claiming);
    }

    // ========================================================
    // ENDPOINT: expectRefund
    // Designates (or re-designates) the refund source. The first
    // call folds the retained, untransferred fee into the refund
    // pot: a refunded presale cancels fees.
    // ========================================================

    #[endpoint(expectRefund)]
    fn expect_refund(&self, source: ManagedAddress) {
        self.require_creator();
        let state = self.state().get();
        require!(
            state == PoolState::Paid || state == PoolState::RefundPending,
            "Invalid pool state"
        );
        require!(
            !self.token_claims_started().get(),
            "Token claiming already started"
        );

        let fees = self.total_fees().get();
        if fees > 0u64 {
            self.ledger_register(&ManagedBuffer::from(POT_REFUND), &fees);
            self.total_fees().set(BigUint::zero());
        }

        self.refund_sender().set(&source);
        self.state().set(PoolState::RefundPending);
        self.refund_expected_event(&source, &fees);
    }

    // ========================================================
    // ENDPOINT: refund
    // Refund intake, only from the designated source. The pot
    // is weighted by contribution snapshots, so a refund larger
    // than the original payout still splits fairly.
    // ========================================================

    #[endpoint(refund)]
    #[payable("EGLD")]
    fn refund(&self) {
        require!(
            self.state().get() == PoolState::RefundPending,
            "Invalid pool state"
        );
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.refund_sender().get(),
            "Unexpected refund source"
        );
        let payment = self.call_value().egld_value().clone_value();
        require!(payment > 0u64, "No refund payment");

        self.ledger_register(&ManagedBuffer::from(POT_REFUND), &payment);
        self.refund_received_event(&payment);
    }

    // ========================================================
    // ENDPOINT: transferTokensTo / transferAllTokens
    // Push distribution of the purchased token. The pot total is
    // re-scanned from the ESDT balance so top-ups are picked up
    // automatically; repeat claims pay zero. A participant's
    // first claim also flushes their leftover uncommitted EGLD.
    // ========================================================

    #[endpoint(transferTokensTo)]
    fn transfer_tokens_to(&self, targets: MultiValueEncoded<ManagedAddress>) {
        let token = self.prepare_token_claims();
        for target in targets {
            self.pay_tokens(&token, &target);
        }
    }

    #[endpoint(transferAllTokens)]
    fn transfer_all_tokens(&self) {
        let token = self.prepare_token_claims();
        let count = self.participant_list().len();
        for index in 1..=count {
            let target = self.participant_list().get(index);
            self.pay_tokens(&token, &target);
        }
    }

    // ========================================================
    // ENDPOINT: transferFees / transferAndDistributeFees
    // Forwards the retained fee to the fee manager, once. When a
    // token is configured the fee only becomes payable after
    // token claiming has actually started.
    // ========================================================

    #[endpoint(transferFees)]
    fn transfer_fees(&self) {
        self.forward_fees();
    }

    #[endpoint(transferAndDistributeFees)]
    fn transfer_and_distribute_fees(&self) {
        self.forward_fees();

        let mut targets = MultiValueEncoded::new();
        targets.push(self.creator().get());
        self.tx()
            .to(&self.fee_manager_address().get())
            .typed(fee_manager_proxy::FeeManagerProxy)
            .distribute_fees(self.blockchain().get_sc_address(), targets)
            .sync_call();
    }

    // ========================================================
    // Internal
    // ========================================================

    fn credit_deposit(&self, caller: &ManagedAddress, amount: &BigUint) {
        let mut participant = self.get_or_create_participant(caller);
        require!(self.is_eligible(&participant), "Not whitelisted");

        let pool_total = self.pool_contribution_balance().get();
        let pool_max = self.max_pool_balance().get();
        let max_contribution = self.max_contribution().get();

        let pool_room = if pool_max > pool_total {
            &pool_max - &pool_total
        } else {
            BigUint::zero()
        };
        let personal_room = if max_contribution > participant.contribution {
            &max_contribution - &participant.contribution
        } else {
            BigUint::zero()
        };

        let mut accepted = amount.clone();
        if accepted > pool_room {
            accepted = pool_room;
        }
        if accepted > personal_room {
            accepted = personal_room;
        }

        let new_contribution = &participant.contribution + &accepted;
        if new_contribution > 0u64 {
            require!(
                new_contribution >= self.min_contribution().get(),
                "Contribution below minimum"
            );
        }

        participant.remaining += amount - &accepted;
        participant.contribution = new_contribution;
        self.pool_contribution_balance().update(|t| *t += &accepted);
        self.participants(caller).set(&participant);

        self.deposit_event(caller, amount, &accepted);
    }

    /// Re-derives one participant's contribution/remaining split
    /// from the current settings and the pool capacity as consumed
    /// by everyone else. Ineligible participants are skipped.
    fn rebalance_participant(&self, address: &ManagedAddress) {
        if self.participants(address).is_empty() {
            return;
        }
        let mut participant = self.participants(address).get();
        if !self.is_eligible(&participant) {
            return;
        }

        let total = &participant.contribution + &participant.remaining;
        let pool_without = &self.pool_contribution_balance().get() - &participant.contribution;
        let pool_max = self.max_pool_balance().get();
        let pool_room = if pool_max > pool_without {
            &pool_max - &pool_without
        } else {
            BigUint::zero()
        };

        let mut new_contribution = total.clone();
        let max_contribution = self.max_contribution().get();
        if new_contribution > max_contribution {
            new_contribution = max_contribution;
        }
        if new_contribution > pool_room {
            new_contribution = pool_room;
        }
        if new_contribution < self.min_contribution().get() {
            new_contribution = BigUint::zero();
        }

        self.pool_contribution_balance()
            .set(&pool_without + &new_contribution);
        participant.remaining = &total - &new_contribution;
        participant.contribution = new_contribution;
        self.participants(address).set(&participant);

        // restored identifiers take part in future pots again
        self.ledger_include(&ManagedBuffer::from(POT_REFUND), address);
        self.ledger_include(&ManagedBuffer::from(POT_TOKEN), address);

        self.rebalance_event(address, &participant.contribution, &participant.remaining);
    }

    fn prepare_token_claims(&self) -> TokenIdentifier {
        require!(
            self.state().get() == PoolState::Paid,
            "Invalid pool state"
        );
        require!(!self.token_id().is_empty(), "Token not set");
        require!(
            self.allow_token_claiming().get(),
            "Token claiming disabled"
        );

        let token = self.token_id().get();
        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token.clone()), 0);
        let observed = &balance + &self.token_claimed_total().get();
        self.ledger_sync_observed(&ManagedBuffer::from(POT_TOKEN), &observed);
        token
    }

    fn pay_tokens(&self, token: &TokenIdentifier, target: &ManagedAddress) {
        if self.participants(target).is_empty() {
            return;
        }
        let mut participant = self.participants(target).get();

        if participant.remaining > 0u64 {
            let flush = participant.remaining.clone();
            participant.remaining = BigUint::zero();
            self.participants(target).set(&participant);
            self.send().direct_egld(target, &flush);
        }

        let due = self.ledger_settle(
            &ManagedBuffer::from(POT_TOKEN),
            target,
            &participant.contribution,
            &self.pool_contribution_balance().get(),
        );
        if due > 0u64 {
            self.token_claimed_total().update(|t| *t += &due);
            self.token_claims_started().set(true);
            self.send().direct_esdt(target, token, 0, &due);
            self.tokens_claimed_event(target, token, &due);
        }
    }

    fn forward_fees(&self) {
        self.require_creator();
        require!(
            self.state().get() == PoolState::Paid,
            "Invalid pool state"
        );
        require!(!self.fees_transferred().get(), "Fees already transferred");

        let fees = self.total_fees().get();
        require!(fees > 0u64, "No fees to transfer");
        if !self.token_id().is_empty() {
            require!(
                self.token_claims_started().get(),
                "Token claiming has not started"
            );
        }

        self.fees_transferred().set(true);
        self.total_fees().set(BigUint::zero());
        self.tx()
            .to(&self.fee_manager_address().get())
            .typed(fee_manager_proxy::FeeManagerProxy)
            .send_fees()
            .egld(&fees)
            .sync_call();
        self.fees_transferred_event(&fees);
    }

    fn get_or_create_participant(&self, address: &ManagedAddress) -> Participant<Self::Api> {
        if self.participants(address).is_empty() {
            self.participant_list().push(address);
            Participant {
                contribution: BigUint::zero(),
                remaining: BigUint::zero(),
                whitelisted: false,
            }
        } else {
            self.participants(address).get()
        }
    }

    fn add_to_whitelist(&self, address: &ManagedAddress) {
        let mut participant = self.get_or_create_participant(address);
        participant.whitelisted = true;
        self.participants(address).set(&participant);
    }

    fn is_eligible(&self, participant: &Participant<Self::Api>) -> bool {
        participant.whitelisted || !self.restricted().get()
    }

    fn validate_settings(&self, min: &BigUint, max: &BigUint, pool_max: &BigUint) {
        let ceiling = BigUint::from(10u32).pow(SETTING_CEILING_EGLD_POW);
        require!(
            *min <= ceiling && *max <= ceiling && *pool_max <= ceiling,
            "Setting exceeds ceiling"
        );
        require!(min <= max, "Minimum above maximum");
        require!(max <= pool_max, "Maximum above pool cap");
    }

    fn require_creator(&self) {
        require!(
            self.blockchain().get_caller() == self.creator().get(),
            "Only creator"
        );
    }

    fn require_creator_or_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.creator().get() || self.admins().contains(&caller),
            "Only creator or admin"
        );
    }

    fn require_open(&self) {
        require!(self.state().get() == PoolState::Open, "Pool is not open");
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getParticipant)]
    fn get_participant(&self, address: ManagedAddress) -> Participant<Self::Api> {
        require!(!self.participants(&address).is_empty(), "Unknown participant");
        self.participants(&address).get()
    }

    #[view(getParticipantBalances)]
    fn get_participant_balances(
        &self,
    ) -> MultiValue4<
        ManagedVec<ManagedAddress>,
        ManagedVec<BigUint>,
        ManagedVec<BigUint>,
        ManagedVec<bool>,
    > {
        let mut addresses = ManagedVec::new();
        let mut contributions = ManagedVec::new();
        let mut remaining = ManagedVec::new();
        let mut whitelisted = ManagedVec::new();

        let count = self.participant_list().len();
        for index in 1..=count {
            let address = self.participant_list().get(index);
            let participant = self.participants(&address).get();
            addresses.push(address);
            contributions.push(participant.contribution);
            remaining.push(participant.remaining);
            whitelisted.push(participant.whitelisted);
        }
        (addresses, contributions, remaining, whitelisted).into()
    }

    #[view(getContributionSettings)]
    fn get_contribution_settings(&self) -> MultiValue3<BigUint, BigUint, BigUint> {
        (
            self.min_contribution().get(),
            self.max_contribution().get(),
            self.max_pool_balance().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] amount: &BigUint,
        accepted: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(&self, #[indexed] participant: &ManagedAddress, amount: &BigUint);

    #[event("settingsChanged")]
    fn settings_changed_event(
        &self,
        #[indexed] min_contribution: &BigUint,
        #[indexed] max_contribution: &BigUint,
        max_pool_balance: &BigUint,
    );

    #[event("rebalance")]
    fn rebalance_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] contribution: &BigUint,
        remaining: &BigUint,
    );

    #[event("whitelistAdded")]
    fn whitelist_added_event(&self, #[indexed] participant: &ManagedAddress);

    #[event("whitelistRemoved")]
    fn whitelist_removed_event(&self, #[indexed] participant: &ManagedAddress);

    #[event("whitelistDisabled")]
    fn whitelist_disabled_event(&self);

    #[event("poolFailed")]
    fn pool_failed_event(&self);

    #[event("poolPaid")]
    fn pool_paid_event(
        &self,
        #[indexed] presale: &ManagedAddress,
        #[indexed] amount: &BigUint,
        fee: &BigUint,
    );

    #[event("tokenSet")]
    fn token_set_event(&self, #[indexed] token: &TokenIdentifier, allow_claiming: bool);

    #[event("refundExpected")]
    fn refund_expected_event(&self, #[indexed] source: &ManagedAddress, folded_fees: &BigUint);

    #[event("refundReceived")]
    fn refund_received_event(&self, #[indexed] amount: &BigUint);

    #[event("tokensClaimed")]
    fn tokens_claimed_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        amount: &BigUint,
    );

    #[event("feesTransferred")]
    fn fees_transferred_event(&self, #[indexed] amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[view(getCreator)]
    #[storage_mapper("creator")]
    fn creator(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("admins")]
    fn admins(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("feeManagerAddress")]
    fn fee_manager_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getFeesPerEther)]
    #[storage_mapper("feesPerEther")]
    fn fees_per_ether(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("minContribution")]
    fn min_contribution(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("maxContribution")]
    fn max_contribution(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("maxPoolBalance")]
    fn max_pool_balance(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("restricted")]
    fn restricted(&self) -> SingleValueMapper<bool>;

    // ── Pool state ──

    #[view(getPoolState)]
    #[storage_mapper("state")]
    fn state(&self) -> SingleValueMapper<PoolState>;

    #[view(poolContributionBalance)]
    #[storage_mapper("poolContributionBalance")]
    fn pool_contribution_balance(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("participants")]
    fn participants(&self, address: &ManagedAddress)
        -> SingleValueMapper<Participant<Self::Api>>;

    #[storage_mapper("participantList")]
    fn participant_list(&self) -> VecMapper<ManagedAddress>;

    // ── Fees ──

    #[view(getTotalFees)]
    #[storage_mapper("totalFees")]
    fn total_fees(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("feesTransferred")]
    fn fees_transferred(&self) -> SingleValueMapper<bool>;

    // ── Refunds ──

    #[storage_mapper("refundSender")]
    fn refund_sender(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Token distribution ──

    #[view(getTokenId)]
    #[storage_mapper("tokenId")]
    fn token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("allowTokenClaiming")]
    fn allow_token_claiming(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("tokenClaimsStarted")]
    fn token_claims_started(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("tokenClaimedTotal")]
    fn token_claimed_total(&self) -> SingleValueMapper<BigUint>;
}
