use multiversx_sc::proxy_imports::*;

use crate::types::{Participant, PoolState};

pub struct ContributionPoolProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ContributionPoolProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ContributionPoolProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ContributionPoolProxyMethods { wrapped_tx: tx }
    }
}

pub struct ContributionPoolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> ContributionPoolProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    #[allow(clippy::too_many_arguments)]
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
        Arg4: ProxyArg<BigUint<Env::Api>>,
        Arg5: ProxyArg<bool>,
        Arg6: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        fee_manager: Arg0,
        fees_per_ether: Arg1,
        min_contribution: Arg2,
        max_contribution: Arg3,
        max_pool_balance: Arg4,
        restricted: Arg5,
        admins: Arg6,
    ) -> TxTypedDeploy<Env, From, (), Gas, ()> {
        self.wrapped_tx
            .raw_deploy()
            .argument(&fee_manager)
            .argument(&fees_per_ether)
            .argument(&min_contribution)
            .argument(&max_contribution)
            .argument(&max_pool_balance)
            .argument(&restricted)
            .argument(&admins)
            .original_result()
    }
}

impl<Env, From, To, Gas> ContributionPoolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn deposit(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx.raw_call("deposit").original_result()
    }

    pub fn withdraw<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdraw")
            .argument(&amount)
            .original_result()
    }

    pub fn withdraw_all(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawAll")
            .original_result()
    }

    pub fn set_contribution_settings<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        min_contribution: Arg0,
        max_contribution: Arg1,
        max_pool_balance: Arg2,
        rebalance: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setContributionSettings")
            .argument(&min_contribution)
            .argument(&max_contribution)
            .argument(&max_pool_balance)
            .argument(&rebalance)
            .original_result()
    }

    pub fn modify_whitelist<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        add: Arg0,
        remove: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("modifyWhitelist")
            .argument(&add)
            .argument(&remove)
            .original_result()
    }

    pub fn remove_whitelist(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeWhitelist")
            .original_result()
    }

    pub fn fail(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("fail")
            .original_result()
    }

    pub fn pay_to_presale<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        presale: Arg0,
        min_pool_total: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("payToPresale")
            .argument(&presale)
            .argument(&min_pool_total)
            .original_result()
    }

    pub fn set_token<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg1: ProxyArg<bool>,
    >(
        self,
        token: Arg0,
        allow_claiming: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setToken")
            .argument(&token)
            .argument(&allow_claiming)
            .original_result()
    }

    pub fn expect_refund<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        source: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("expectRefund")
            .argument(&source)
            .original_result()
    }

    pub fn refund(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx.raw_call("refund").original_result()
    }

    pub fn transfer_tokens_to<
        Arg0: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        targets: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transferTokensTo")
            .argument(&targets)
            .original_result()
    }

    pub fn transfer_all_tokens(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transferAllTokens")
            .original_result()
    }

    pub fn transfer_fees(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transferFees")
            .original_result()
    }

    pub fn transfer_and_distribute_fees(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transferAndDistributeFees")
            .original_result()
    }

    pub fn get_participant<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Participant<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getParticipant")
            .argument(&address)
            .original_result()
    }

    #[allow(clippy::type_complexity)]
    pub fn get_participant_balances(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue4<
            ManagedVec<Env::Api, ManagedAddress<Env::Api>>,
            ManagedVec<Env::Api, BigUint<Env::Api>>,
            ManagedVec<Env::Api, BigUint<Env::Api>>,
            ManagedVec<Env::Api, bool>,
        >,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getParticipantBalances")
            .original_result()
    }

    pub fn get_contribution_settings(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue3<BigUint<Env::Api>, BigUint<Env::Api>, BigUint<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContributionSettings")
            .original_result()
    }

    pub fn get_pool_state(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, PoolState> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPoolState")
            .original_result()
    }

    pub fn pool_contribution_balance(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("poolContributionBalance")
            .original_result()
    }

    pub fn get_total_fees(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalFees")
            .original_result()
    }
}
