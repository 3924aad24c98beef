
#![allow(dead_code)]

extern crate std;

use soroban_sdk::Address;

use crate::types::Campaign;

/// INV-1: `pledged` equals the sum of all pledger amounts.
pub fn assert_pledged_matches_entries(campaign: &Campaign) {
    let sum: i128 = campaign.pledgers.iter().map(|p| p.amount).sum();
    assert_eq!(
        campaign.pledged, sum,
        "INV-1 violated: pledged {} != sum of entries {}",
        campaign.pledged, sum
    );
}

/// INV-2: no address holds two non-zero entries.
pub fn assert_unique_active_pledgers(campaign: &Campaign) {
    let active: std::vec::Vec<Address> = campaign
        .pledgers
        .iter()
        .filter(|p| p.amount > 0)
        .map(|p| p.address)
        .collect();
    for (i, a) in active.iter().enumerate() {
        for b in active.iter().skip(i + 1) {
            assert_ne!(a, b, "INV-2 violated: duplicate active pledger");
        }
    }
}

/// INV-3: amounts are never negative.
pub fn assert_amounts_non_negative(campaign: &Campaign) {
    assert!(campaign.pledged >= 0, "INV-3 violated: negative pledged total");
    for p in campaign.pledgers.iter() {
        assert!(p.amount >= 0, "INV-3 violated: negative pledge {}", p.amount);
    }
}

/// INV-4: goal is positive and the window is well formed.
pub fn assert_config_well_formed(campaign: &Campaign) {
    assert!(campaign.goal > 0, "INV-4 violated: non-positive goal ({})", campaign.goal);
    assert!(
        campaign.timestamp_end >= campaign.timestamp_start,
        "INV-4 violated: end {} before start {}",
        campaign.timestamp_end,
        campaign.timestamp_start
    );
}

/// INV-5: an unsettled campaign is never marked funded.
pub fn assert_funded_only_when_settled(campaign: &Campaign) {
    if campaign.is_active {
        assert!(!campaign.is_funded, "INV-5 violated: active campaign marked funded");
    }
}

/// INV-6: escrow held for a campaign equals what it still owes.
pub fn assert_escrow_matches_pledged(campaign: &Campaign, escrow: i128) {
    assert_eq!(
        escrow, campaign.pledged,
        "INV-6 violated: escrow {} != pledged {}",
        escrow, campaign.pledged
    );
}

/// INV-7: fields fixed at creation never change.
pub fn assert_campaign_immutable_fields(original: &Campaign, current: &Campaign) {
    assert_eq!(original.id, current.id, "INV-7 violated: id changed");
    assert_eq!(original.owner, current.owner, "INV-7 violated: owner changed");
    assert_eq!(original.name, current.name, "INV-7 violated: name changed");
    assert_eq!(
        original.description, current.description,
        "INV-7 violated: description changed"
    );
    assert_eq!(original.goal, current.goal, "INV-7 violated: goal changed");
    assert_eq!(
        original.timestamp_start, current.timestamp_start,
        "INV-7 violated: timestamp_start changed"
    );
    assert_eq!(
        original.timestamp_end, current.timestamp_end,
        "INV-7 violated: timestamp_end changed"
    );
}

/// INV-8: once settled, a campaign stays settled with the same outcome.
pub fn assert_settlement_stable(before: &Campaign, after: &Campaign) {
    if !before.is_active {
        assert!(!after.is_active, "INV-8 violated: campaign reactivated");
        assert_eq!(
            before.is_funded, after.is_funded,
            "INV-8 violated: funding outcome changed after settlement"
        );
    }
}

/// Run all stateless campaign invariants.
pub fn assert_all_campaign_invariants(campaign: &Campaign) {
    assert_pledged_matches_entries(campaign);
    assert_unique_active_pledgers(campaign);
    assert_amounts_non_negative(campaign);
    assert_config_well_formed(campaign);
    assert_funded_only_when_settled(campaign);
}
