use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

// Topic shared by every event emitted by this contract.
pub const AUCTION: Symbol = symbol_short!("auction");

pub const CREATED: Symbol = symbol_short!("created");

pub const BID: Symbol = symbol_short!("bid");

pub const CANCELLED: Symbol = symbol_short!("cancelled");

pub const WITHDRAWN: Symbol = symbol_short!("withdrawn");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    pub auction_id: u32,
    pub bid_asset: Address,
    pub sell_asset: Address,
    pub sell_asset_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlaced {
    pub auction_id: u32,
    pub amount: i128,
    pub bidder: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCancelled {
    pub auction_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub auction_id: u32,
    pub asset: Address,
    pub amount: i128,
    pub user: Address,
}
