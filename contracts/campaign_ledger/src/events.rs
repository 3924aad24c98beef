use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign: BytesN<32>,
    pub owner: Address,
    pub name: String,
    pub goal: i128,
    pub timestamp_end: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PledgeSent {
    pub campaign: BytesN<32>,
    pub pledger: Address,
    pub amount: i128,
    pub pledged: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PledgeCancelled {
    pub campaign: BytesN<32>,
    pub pledger: Address,
    pub amount: i128,
    pub pledged: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignSettled {
    pub campaign: BytesN<32>,
    pub caller: Address,
    pub pledged: i128,
    pub goal: i128,
    pub is_funded: bool,
}

/// Owner payout of a funded campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsClaimed {
    pub campaign: BytesN<32>,
    pub owner: Address,
    pub amount: i128,
}

/// Pledger refund from a campaign that missed its goal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsRefunded {
    pub campaign: BytesN<32>,
    pub pledger: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(
    env: &Env,
    campaign: BytesN<32>,
    owner: Address,
    name: String,
    goal: i128,
    timestamp_end: u64,
) {
    let topics = (symbol_short!("created"), campaign.clone());
    let data = CampaignCreated {
        campaign,
        owner,
        name,
        goal,
        timestamp_end,
    };
    env.events().publish(topics, data);
}

pub fn emit_pledge_sent(env: &Env, campaign: BytesN<32>, pledger: Address, amount: i128, pledged: i128) {
    let topics = (symbol_short!("pledged"), campaign.clone());
    let data = PledgeSent {
        campaign,
        pledger,
        amount,
        pledged,
    };
    env.events().publish(topics, data);
}

pub fn emit_pledge_cancelled(
    env: &Env,
    campaign: BytesN<32>,
    pledger: Address,
    amount: i128,
    pledged: i128,
) {
    let topics = (symbol_short!("cancel"), campaign.clone());
    let data = PledgeCancelled {
        campaign,
        pledger,
        amount,
        pledged,
    };
    env.events().publish(topics, data);
}

pub fn emit_campaign_settled(
    env: &Env,
    campaign: BytesN<32>,
    caller: Address,
    pledged: i128,
    goal: i128,
    is_funded: bool,
) {
    let topics = (symbol_short!("settled"), campaign.clone());
    let data = CampaignSettled {
        campaign,
        caller,
        pledged,
        goal,
        is_funded,
    };
    env.events().publish(topics, data);
}

pub fn emit_funds_claimed(env: &Env, campaign: BytesN<32>, owner: Address, amount: i128) {
    let topics = (symbol_short!("claimed"), campaign.clone());
    let data = FundsClaimed {
        campaign,
        owner,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_funds_refunded(env: &Env, campaign: BytesN<32>, pledger: Address, amount: i128) {
    let topics = (symbol_short!("refunded"), campaign.clone());
    let data = FundsRefunded {
        campaign,
        pledger,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_protocol_paused(env: &Env, admin: Address) {
    env.events().publish((symbol_short!("paused"),), admin);
}

pub fn emit_protocol_unpaused(env: &Env, admin: Address) {
    env.events().publish((symbol_short!("unpaused"),), admin);
}

pub fn emit_admin_transferred(env: &Env, previous: Address, new_admin: Address) {
    env.events()
        .publish((symbol_short!("admin"), previous), new_admin);
}
