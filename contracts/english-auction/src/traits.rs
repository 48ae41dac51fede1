use crate::types::*;
use soroban_sdk::{Address, Env};

/// Interface for the English auction contract.
pub trait EnglishAuctionTrait {
    /// Escrow `sell_asset_amount` of `sell_asset` and open an auction that
    /// accepts bids in `bid_asset` for `duration` ledgers. Returns its id.
    fn create(
        env: Env,
        seller: Address,
        bid_asset: Address,
        duration: u32,
        initial_price: i128,
        reserve_price: Option<i128>,
        sell_asset: Address,
        sell_asset_amount: i128,
    ) -> u32;

    /// Add `amount` of `asset` to the bidder's position on an open auction.
    fn bid(env: Env, auction_id: u32, bidder: Address, asset: Address, amount: i128);

    fn cancel(env: Env, auction_id: u32, caller: Address);

    /// Pay out whatever `caller` is owed once the auction is over.
    fn withdraw(env: Env, auction_id: u32, caller: Address);

    fn auction_info(env: Env, auction_id: u32) -> Option<Auction>;

    fn deposit_balance(env: Env, auction_id: u32, identity: Address) -> Option<i128>;

    fn total_auctions(env: Env) -> u32;
}
