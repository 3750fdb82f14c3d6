use multiversx_sc::proxy_imports::*;

pub struct FeeManagerProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for FeeManagerProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = FeeManagerProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        FeeManagerProxyMethods { wrapped_tx: tx }
    }
}

pub struct FeeManagerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> FeeManagerProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>>(
        self,
        team: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&team)
            .original_result()
    }
}

impl<Env, From, To, Gas> FeeManagerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn create<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        fees_per_ether: Arg0,
        recipients: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("create")
            .argument(&fees_per_ether)
            .argument(&recipients)
            .original_result()
    }

    pub fn send_fees(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx.raw_call("sendFees").original_result()
    }

    pub fn claim_my_fees<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        client: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("claimMyFees")
            .argument(&client)
            .original_result()
    }

    pub fn distribute_fees<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        client: Arg0,
        targets: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("distributeFees")
            .argument(&client)
            .argument(&targets)
            .original_result()
    }

    pub fn claim_my_team_fees(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("claimMyTeamFees")
            .original_result()
    }

    pub fn distribute_team_fees(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("distributeTeamFees")
            .original_result()
    }

    pub fn claim_my_team_tokens<Arg0: ProxyArg<TokenIdentifier<Env::Api>>>(
        self,
        token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("claimMyTeamTokens")
            .argument(&token)
            .original_result()
    }

    pub fn distribute_team_tokens<Arg0: ProxyArg<TokenIdentifier<Env::Api>>>(
        self,
        token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("distributeTeamTokens")
            .argument(&token)
            .original_result()
    }

    pub fn get_fees<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        client: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<BigUint<Env::Api>, BigUint<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFees")
            .argument(&client)
            .original_result()
    }

    pub fn team_member<Arg0: ProxyArg<usize>>(
        self,
        index: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("teamMembers")
            .argument(&index)
            .original_result()
    }

    pub fn team_member_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("teamMemberCount")
            .original_result()
    }

    pub fn outstanding_fees_balance(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("outstandingFeesBalance")
            .original_result()
    }
}
