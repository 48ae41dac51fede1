use crate::event::{
    AuctionCancelled, AuctionCreated, BidPlaced, Withdrawn, AUCTION, BID, CANCELLED, CREATED,
    WITHDRAWN,
};
use crate::storage::AuctionStore;
use crate::traits::EnglishAuctionTrait;
use crate::withdrawal::{payout_for, resolve_role};
use crate::{bid::record_bid, checks::validate_creation};
use crate::{distribution, errors::*, types::*};
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, Map};

#[contract]
pub struct EnglishAuctionContract;

#[contractimpl]
impl EnglishAuctionTrait for EnglishAuctionContract {
    /// Creates a new auction, escrowing the seller's item.
    fn create(
        env: Env,
        seller: Address,
        bid_asset: Address,
        duration: u32,
        initial_price: i128,
        reserve_price: Option<i128>,
        sell_asset: Address,
        sell_asset_amount: i128,
    ) -> u32 {
        seller.require_auth();

        validate_creation(&env, duration, initial_price, reserve_price, sell_asset_amount);

        let end_block = match env.ledger().sequence().checked_add(duration) {
            Some(end_block) => end_block,
            None => panic_with_error!(&env, InitError::AuctionDurationTooLong),
        };

        distribution::transfer_to_contract(&env, &sell_asset, &seller, &sell_asset_amount);

        // The seller's escrow is their deposit; it is what they withdraw
        // against once the auction is over.
        let mut deposits = Map::new(&env);
        deposits.set(seller.clone(), sell_asset_amount);

        let auction = Auction {
            bid_asset: bid_asset.clone(),
            sell_asset: sell_asset.clone(),
            sell_asset_amount,
            initial_price,
            reserve_price,
            seller,
            end_block,
            state: State::Open,
            highest_bid: 0,
            highest_bidder: None,
            deposits,
        };

        let auction_id = AuctionStore::new(&env).insert(&auction);

        log!(&env, "auction {} created, ends at {}", auction_id, auction.end_block);

        env.events().publish(
            (AUCTION, CREATED),
            AuctionCreated {
                auction_id,
                bid_asset,
                sell_asset,
                sell_asset_amount,
            },
        );

        auction_id
    }

    /// Places (or tops up) a bid on an open auction.
    fn bid(env: Env, auction_id: u32, bidder: Address, asset: Address, amount: i128) {
        bidder.require_auth();

        let store = AuctionStore::new(&env);
        let mut auction_data = Self::_load(&env, &store, auction_id);

        let total_bid = record_bid(&env, &mut auction_data, &bidder, &asset, amount);

        store.save(auction_id, &auction_data);

        log!(&env, "auction {}: new highest bid {}", auction_id, total_bid);

        env.events().publish(
            (AUCTION, BID),
            BidPlaced {
                auction_id,
                amount: total_bid,
                bidder,
            },
        );
    }

    /// Closes an open auction early. Deposits stay in place so every party
    /// can still withdraw.
    fn cancel(env: Env, auction_id: u32, caller: Address) {
        caller.require_auth();

        let store = AuctionStore::new(&env);
        let mut auction_data = Self::_load(&env, &store, auction_id);

        auction_data.check_can_cancel(&env, &caller);

        auction_data.highest_bidder = None;
        auction_data.state = State::Closed;

        store.save(auction_id, &auction_data);

        env.events()
            .publish((AUCTION, CANCELLED), AuctionCancelled { auction_id });
    }

    /// Settles the caller's position on a finished auction.
    fn withdraw(env: Env, auction_id: u32, caller: Address) {
        caller.require_auth();

        let store = AuctionStore::new(&env);
        let mut auction_data = Self::_load(&env, &store, auction_id);

        auction_data.check_can_withdraw(&env);

        // Past the deadline but never closed: close it now
        if auction_data.is_open() {
            log!(&env, "auction {} closed on withdrawal", auction_id);
            auction_data.state = State::Closed;
        }

        let deposit = match auction_data.deposit_of(&caller) {
            Some(deposit) => deposit,
            None => panic_with_error!(&env, UserError::UserHasAlreadyWithdrawn),
        };
        auction_data.deposits.remove(caller.clone());

        let role = resolve_role(&auction_data, &caller);
        let payout = payout_for(&auction_data, role, deposit);

        store.save(auction_id, &auction_data);

        distribution::release(&env, &caller, &payout);

        log!(&env, "auction {}: {} withdrawn", auction_id, payout.amount);

        env.events().publish(
            (AUCTION, WITHDRAWN),
            Withdrawn {
                auction_id,
                asset: payout.asset,
                amount: payout.amount,
                user: caller,
            },
        );
    }

    fn auction_info(env: Env, auction_id: u32) -> Option<Auction> {
        AuctionStore::new(&env).get(auction_id)
    }

    fn deposit_balance(env: Env, auction_id: u32, identity: Address) -> Option<i128> {
        AuctionStore::new(&env)
            .get(auction_id)
            .and_then(|auction| auction.deposit_of(&identity))
    }

    fn total_auctions(env: Env) -> u32 {
        AuctionStore::new(&env).total_auctions()
    }
}

impl EnglishAuctionContract {
    /// Internal helper to fetch an auction or reject the call.
    fn _load(env: &Env, store: &AuctionStore, auction_id: u32) -> Auction {
        match store.get(auction_id) {
            Some(auction) => auction,
            None => panic_with_error!(env, InputError::AuctionDoesNotExist),
        }
    }
}
