use soroban_sdk::{contracttype, Address, Map};

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Auction {
    pub bid_asset: Address,          // Token accepted for bids
    pub sell_asset: Address,         // Token escrowed by the seller
    pub sell_asset_amount: i128,     // Amount of `sell_asset` held in escrow
    pub initial_price: i128,         // Minimum total bid
    pub reserve_price: Option<i128>, // Closes the auction when met exactly
    pub seller: Address,
    pub end_block: u32, // Last ledger sequence at which bids are accepted
    pub state: State,
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,

    // Cumulative amount per identity. The seller's escrow is recorded here
    // too; an entry is removed once its owner withdraws.
    pub deposits: Map<Address, i128>,
}

#[contracttype]
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum State {
    Open,
    Closed,
}

/// What a caller is entitled to when withdrawing from a closed auction.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Role {
    /// Receives the escrowed sale asset: the winning bidder, or the seller
    /// when nobody holds the lead.
    Winner,
    /// Receives the winning bid in the bid asset.
    Seller,
    /// Receives their own deposit back in the bid asset.
    Refund,
}

/// A single transfer out of the contract.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Payout {
    pub asset: Address,
    pub amount: i128,
}
