extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{
    CampaignCreated, CampaignSettled, FundsClaimed, FundsRefunded, PledgeCancelled, PledgeSent,
};
use crate::{CampaignLedger, CampaignLedgerClient};

fn setup() -> (Env, CampaignLedgerClient<'static>, token::Client<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(CampaignLedger, ());
    let client = CampaignLedgerClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    let token = create_token(&env, &Address::generate(&env));
    client.init(&admin, &token.address);
    (env, client, token)
}

fn create_token<'a>(env: &Env, admin: &Address) -> token::Client<'a> {
    let addr = env.register_stellar_asset_contract_v2(admin.clone());
    token::Client::new(env, &addr.address())
}

fn pledger_with(env: &Env, token: &token::Client, amount: i128) -> Address {
    let pledger = Address::generate(env);
    token::StellarAssetClient::new(env, &token.address).mint(&pledger, &amount);
    pledger
}

fn open_campaign(env: &Env, client: &CampaignLedgerClient, goal: i128) -> (Address, crate::Campaign) {
    let owner = Address::generate(env);
    let campaign = client.init_campaign(
        &owner,
        &String::from_str(env, "campaign_2"),
        &String::from_str(env, "This is to make a cool crypto project."),
        &goal,
        &100,
    );
    (owner, campaign)
}

#[test]
fn test_campaign_created_event() {
    let (env, client, _token) = setup();
    let (owner, campaign) = open_campaign(&env, &client, 5000);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("created"), campaign_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("created").into_val(&env), campaign.id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, CampaignCreated {
        campaign: campaign.id.clone(),
        owner,
        name: String::from_str(&env, "campaign_2"),
        goal: 5000,
        timestamp_end: campaign.timestamp_end,
    });
}

#[test]
fn test_pledge_sent_and_cancelled_events() {
    let (env, client, token) = setup();
    let (_owner, campaign) = open_campaign(&env, &client, 5000);
    let first = pledger_with(&env, &token, 1000);
    let second = pledger_with(&env, &token, 700);

    client.send_pledge(&campaign.id, &first, &1000);
    client.send_pledge(&campaign.id, &second, &700);

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![&env, symbol_short!("pledged").into_val(&env), campaign.id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);
    let event_data: PledgeSent = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, PledgeSent {
        campaign: campaign.id.clone(),
        pledger: second.clone(),
        amount: 700,
        pledged: 1700,
    });

    client.cancel_pledge(&campaign.id, &first);

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![&env, symbol_short!("cancel").into_val(&env), campaign.id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);
    let event_data: PledgeCancelled = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, PledgeCancelled {
        campaign: campaign.id.clone(),
        pledger: first,
        amount: 1000,
        pledged: 700,
    });
}

#[test]
fn test_settled_and_claimed_events() {
    let (env, client, token) = setup();
    let (owner, campaign) = open_campaign(&env, &client, 500);
    let pledger = pledger_with(&env, &token, 500);
    let keeper = Address::generate(&env);
    client.send_pledge(&campaign.id, &pledger, &500);

    env.ledger().with_mut(|li| li.timestamp += 100);
    client.check_campaign(&campaign.id, &keeper);

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![&env, symbol_short!("settled").into_val(&env), campaign.id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);
    let event_data: CampaignSettled = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, CampaignSettled {
        campaign: campaign.id.clone(),
        caller: keeper.clone(),
        pledged: 500,
        goal: 500,
        is_funded: true,
    });

    // A repeated check settles nothing.
    assert!(!client.check_campaign(&campaign.id, &keeper));

    client.claim_funds(&campaign.id, &owner);

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![&env, symbol_short!("claimed").into_val(&env), campaign.id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);
    let event_data: FundsClaimed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, FundsClaimed {
        campaign: campaign.id.clone(),
        owner,
        amount: 500,
    });
}

#[test]
fn test_refunded_event() {
    let (env, client, token) = setup();
    let (owner, campaign) = open_campaign(&env, &client, 5000);
    let pledger = pledger_with(&env, &token, 100);
    client.send_pledge(&campaign.id, &pledger, &100);

    env.ledger().with_mut(|li| li.timestamp += 100);
    client.check_campaign(&campaign.id, &owner);
    client.claim_funds(&campaign.id, &pledger);

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![&env, symbol_short!("refunded").into_val(&env), campaign.id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);
    let event_data: FundsRefunded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, FundsRefunded {
        campaign: campaign.id.clone(),
        pledger,
        amount: 100,
    });
}
