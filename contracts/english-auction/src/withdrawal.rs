use soroban_sdk::Address;

use crate::types::*;

type Predicate = fn(&Auction, &Address) -> bool;

/// Withdrawal roles in priority order; the first matching predicate wins.
pub const ROLE_TABLE: [(Predicate, Role); 3] = [
    (is_winner, Role::Winner),
    (is_seller, Role::Seller),
    (always, Role::Refund),
];

// The leader takes the goods. With no leader (no bids, or cancelled) the
// seller takes them back instead.
fn is_winner(auction: &Auction, caller: &Address) -> bool {
    match &auction.highest_bidder {
        Some(bidder) => bidder == caller,
        None => *caller == auction.seller,
    }
}

fn is_seller(auction: &Auction, caller: &Address) -> bool {
    *caller == auction.seller
}

fn always(_: &Auction, _: &Address) -> bool {
    true
}

pub fn resolve_role(auction: &Auction, caller: &Address) -> Role {
    ROLE_TABLE
        .iter()
        .find(|(applies, _)| applies(auction, caller))
        .map(|(_, role)| *role)
        .unwrap_or(Role::Refund)
}

/// What `role` receives. `deposit` is the caller's entry as it stood before
/// the withdrawal removed it.
pub fn payout_for(auction: &Auction, role: Role, deposit: i128) -> Payout {
    match role {
        Role::Winner => Payout {
            asset: auction.sell_asset.clone(),
            amount: auction.sell_asset_amount,
        },
        Role::Seller => Payout {
            asset: auction.bid_asset.clone(),
            amount: auction.highest_bid,
        },
        Role::Refund => Payout {
            asset: auction.bid_asset.clone(),
            amount: deposit,
        },
    }
}
