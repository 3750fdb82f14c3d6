#![no_std]

multiversx_sc::imports!();

pub mod fee_manager_proxy;
pub mod types;

use types::ClientFeeConfig;

// ============================================================
// Constants
// ============================================================

/// EGLD denomination
const ONE_EGLD: u64 = 1_000_000_000_000_000_000;

/// Team cut is capped at 1% of one EGLD per fee-rate unit:
/// team fraction = min(1/2, FEE_CAP_PER_ETHER / fees_per_ether)
const FEE_CAP_PER_ETHER: u64 = 10_000_000_000_000_000;

/// Recipient list bound per client
const MAX_RECIPIENTS: usize = 4;

/// Shared team pot, one across all clients
const TEAM_POT: &[u8] = b"team";

/// Per-client recipient pots, keyed by client address
const CLIENT_POT_PREFIX: &[u8] = b"client:";

/// Per-token team pots
const TEAM_TOKEN_POT_PREFIX: &[u8] = b"teamToken:";

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait FeeManager: proportional_ledger::ProportionalLedgerModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// Duplicate team members are dropped, first occurrence wins.
    #[init]
    fn init(&self, team: MultiValueEncoded<ManagedAddress>) {
        require!(team.len() > 0, "Team cannot be empty");
        for member in team {
            self.team_members().insert(member);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: create
    // Client registration. The caller is the client; its fee
    // split is fixed here, once, forever.
    // ========================================================

    #[endpoint(create)]
    fn create(
        &self,
        fees_per_ether: BigUint,
        recipients: MultiValueEncoded<ManagedAddress>,
    ) {
        let client = self.blockchain().get_caller();
        require!(
            self.client_config(&client).is_empty(),
            "Client already registered"
        );
        require!(fees_per_ether > 0u64, "Fee rate must be positive");
        require!(
            fees_per_ether < BigUint::from(ONE_EGLD) / 2u64,
            "Fee rate too high"
        );

        let mut recipient_vec: ManagedVec<ManagedAddress> = ManagedVec::new();
        for recipient in recipients {
            require!(!recipient_vec.contains(&recipient), "Duplicate recipient");
            recipient_vec.push(recipient);
        }
        require!(
            !recipient_vec.is_empty() && recipient_vec.len() <= MAX_RECIPIENTS,
            "Between 1 and 4 recipients required"
        );

        // team fraction = min(1/2, FEE_CAP / fees_per_ether)
        let cap = BigUint::from(FEE_CAP_PER_ETHER);
        let (recipient_numerator, denominator) = if fees_per_ether >= &cap * 2u64 {
            (&fees_per_ether - &cap, fees_per_ether.clone())
        } else {
            (BigUint::from(1u64), BigUint::from(2u64))
        };

        self.client_registered_event(&client, &fees_per_ether, &recipient_numerator, &denominator);

        self.client_config(&client).set(&ClientFeeConfig {
            recipient_numerator,
            denominator,
            recipients: recipient_vec,
        });
    }

    // ========================================================
    // ENDPOINT: sendFees
    // Fee intake. The recipient share is earmarked in the
    // client's pot; the remainder implicitly accrues to the
    // team pot (see team_pot_cumulative).
    // ========================================================

    #[endpoint(sendFees)]
    #[payable("EGLD")]
    fn send_fees(&self) {
        let client = self.blockchain().get_caller();
        require!(!self.client_config(&client).is_empty(), "Unknown client");

        let payment = self.call_value().egld_value().clone_value();
        require!(payment > 0u64, "No fee payment");

        let config = self.client_config(&client).get();
        let recipient_share = (&payment * &config.recipient_numerator) / &config.denominator;

        let pot = self.client_pot(&client);
        self.ledger_register(&pot, &recipient_share);
        self.outstanding_fees().update(|o| *o += &recipient_share);

        self.fees_received_event(&client, &payment, &recipient_share);
    }

    // ========================================================
    // ENDPOINT: claimMyFees / distributeFees
    // Recipient-pot claims. Claims settle before the transfer;
    // a second claim pays zero.
    // ========================================================

    #[endpoint(claimMyFees)]
    fn claim_my_fees(&self, client: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(!self.client_config(&client).is_empty(), "Unknown client");

        let config = self.client_config(&client).get();
        require!(config.recipients.contains(&caller), "Not a fee recipient");

        self.pay_recipient_fees(&client, &config, &caller);
    }

    /// Pushes matured shares to the listed targets. Anyone can call;
    /// targets that are not recipients of this client are skipped.
    #[endpoint(distributeFees)]
    fn distribute_fees(&self, client: ManagedAddress, targets: MultiValueEncoded<ManagedAddress>) {
        require!(!self.client_config(&client).is_empty(), "Unknown client");
        let config = self.client_config(&client).get();

        for target in targets {
            if !config.recipients.contains(&target) {
                continue;
            }
            self.pay_recipient_fees(&client, &config, &target);
        }
    }

    // ========================================================
    // ENDPOINT: team fee claims
    // The team pot total is re-scanned on every claim from the
    // contract's EGLD balance, so direct donations and members
    // who start claiming late are handled without intake-side
    // bookkeeping. Equal weights across all team members.
    // ========================================================

    #[endpoint(claimMyTeamFees)]
    fn claim_my_team_fees(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.team_members().contains(&caller), "Not a team member");

        self.pay_team_fees(&caller);
    }

    #[endpoint(distributeTeamFees)]
    fn distribute_team_fees(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.team_members().contains(&caller), "Not a team member");

        let members: ManagedVec<ManagedAddress> = self.team_members().iter().collect();
        for member in &members {
            self.pay_team_fees(&member);
        }
    }

    // ========================================================
    // ENDPOINT: team token claims
    // Same equal-weight logic against a per-token pot whose
    // total is re-scanned from the ESDT balance.
    // ========================================================

    #[endpoint(claimMyTeamTokens)]
    fn claim_my_team_tokens(&self, token: TokenIdentifier) {
        let caller = self.blockchain().get_caller();
        require!(self.team_members().contains(&caller), "Not a team member");

        self.pay_team_tokens(&token, &caller);
    }

    #[endpoint(distributeTeamTokens)]
    fn distribute_team_tokens(&self, token: TokenIdentifier) {
        let caller = self.blockchain().get_caller();
        require!(self.team_members().contains(&caller), "Not a team member");

        let members: ManagedVec<ManagedAddress> = self.team_members().iter().collect();
        for member in &members {
            self.pay_team_tokens(&token, &member);
        }
    }

    // ========================================================
    // Internal
    // ========================================================

    fn pay_recipient_fees(
        &self,
        client: &ManagedAddress,
        config: &ClientFeeConfig<Self::Api>,
        recipient: &ManagedAddress,
    ) {
        let pot = self.client_pot(client);
        let weight = BigUint::from(1u64);
        let weight_total = BigUint::from(config.recipients.len() as u64);

        let due = self.ledger_settle(&pot, recipient, &weight, &weight_total);
        if due > 0u64 {
            self.outstanding_fees().update(|o| *o -= &due);
            self.send().direct_egld(recipient, &due);
            self.fees_claimed_event(client, recipient, &due);
        }
    }

    fn pay_team_fees(&self, member: &ManagedAddress) {
        let pot = ManagedBuffer::from(TEAM_POT);
        self.ledger_sync_observed(&pot, &self.team_pot_cumulative());

        let weight = BigUint::from(1u64);
        let weight_total = BigUint::from(self.team_members().len() as u64);

        let due = self.ledger_settle(&pot, member, &weight, &weight_total);
        if due > 0u64 {
            self.team_fees_claimed().update(|c| *c += &due);
            self.send().direct_egld(member, &due);
            self.team_fees_claimed_event(member, &due);
        }
    }

    fn pay_team_tokens(&self, token: &TokenIdentifier, member: &ManagedAddress) {
        let pot = self.team_token_pot(token);
        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token.clone()), 0);
        let observed = &balance + &self.team_tokens_claimed(token).get();
        self.ledger_sync_observed(&pot, &observed);

        let weight = BigUint::from(1u64);
        let weight_total = BigUint::from(self.team_members().len() as u64);

        let due = self.ledger_settle(&pot, member, &weight, &weight_total);
        if due > 0u64 {
            self.team_tokens_claimed(token).update(|c| *c += &due);
            self.send().direct_esdt(member, token, 0, &due);
            self.team_tokens_claimed_event(member, token, &due);
        }
    }

    /// Cumulative team pot intake: everything the contract holds
    /// that is not spoken for by recipient pots, plus everything
    /// the team already took out.
    fn team_pot_cumulative(&self) -> BigUint {
        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        let outstanding = self.outstanding_fees().get();
        let claimed = self.team_fees_claimed().get();
        &balance - &outstanding + &claimed
    }

    fn client_pot(&self, client: &ManagedAddress) -> ManagedBuffer {
        let mut pot = ManagedBuffer::new_from_bytes(CLIENT_POT_PREFIX);
        pot.append(client.as_managed_buffer());
        pot
    }

    fn team_token_pot(&self, token: &TokenIdentifier) -> ManagedBuffer {
        let mut pot = ManagedBuffer::new_from_bytes(TEAM_TOKEN_POT_PREFIX);
        pot.append(token.as_managed_buffer());
        pot
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getFees)]
    fn get_fees(&self, client: ManagedAddress) -> MultiValue2<BigUint, BigUint> {
        require!(!self.client_config(&client).is_empty(), "Unknown client");
        let config = self.client_config(&client).get();
        (config.recipient_numerator, config.denominator).into()
    }

    #[view(teamMembers)]
    fn team_member(&self, index: usize) -> ManagedAddress {
        require!(
            index >= 1 && index <= self.team_members().len(),
            "Invalid team member index"
        );
        self.team_members().get_by_index(index)
    }

    #[view(teamMemberCount)]
    fn team_member_count(&self) -> usize {
        self.team_members().len()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("clientRegistered")]
    fn client_registered_event(
        &self,
        #[indexed] client: &ManagedAddress,
        #[indexed] fees_per_ether: &BigUint,
        #[indexed] recipient_numerator: &BigUint,
        denominator: &BigUint,
    );

    #[event("feesReceived")]
    fn fees_received_event(
        &self,
        #[indexed] client: &ManagedAddress,
        #[indexed] amount: &BigUint,
        recipient_share: &BigUint,
    );

    #[event("feesClaimed")]
    fn fees_claimed_event(
        &self,
        #[indexed] client: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("teamFeesClaimed")]
    fn team_fees_claimed_event(&self, #[indexed] member: &ManagedAddress, amount: &BigUint);

    #[event("teamTokensClaimed")]
    fn team_tokens_claimed_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("clientConfig")]
    fn client_config(
        &self,
        client: &ManagedAddress,
    ) -> SingleValueMapper<ClientFeeConfig<Self::Api>>;

    #[storage_mapper("teamMembers")]
    fn team_members(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Recipient-pot money held here but already earmarked.
    #[view(outstandingFeesBalance)]
    #[storage_mapper("outstandingFees")]
    fn outstanding_fees(&self) -> SingleValueMapper<BigUint>;

    /// Cumulative EGLD paid out of the team pot.
    #[storage_mapper("teamFeesClaimed")]
    fn team_fees_claimed(&self) -> SingleValueMapper<BigUint>;

    /// Cumulative tokens paid out of each per-token team pot.
    #[storage_mapper("teamTokensClaimed")]
    fn team_tokens_claimed(&self, token: &TokenIdentifier) -> SingleValueMapper<BigUint>;
}
