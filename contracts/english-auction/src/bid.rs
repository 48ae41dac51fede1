use soroban_sdk::{log, panic_with_error, Address, Env};

use crate::constants::{EXTENSION_DURATION, EXTENSION_THRESHOLD};
use crate::errors::{InitError, InputError};
use crate::{distribution, types::*};

/// Validates and applies a bid, returning the bidder's new total.
///
/// A bidder's payments aggregate: the total is what they paid now plus
/// whatever they already have on deposit, and that total must beat the
/// current highest bid outright.
pub fn record_bid(
    env: &Env,
    auction_data: &mut Auction,
    bidder: &Address,
    asset: &Address,
    amount: i128,
) -> i128 {
    auction_data.check_can_bid(env, bidder, asset, amount);

    let prior_deposit = auction_data.deposit_of(bidder).unwrap_or(0);
    let total_bid = match prior_deposit.checked_add(amount) {
        Some(total_bid) => total_bid,
        None => panic_with_error!(env, InputError::IncorrectAmountProvided),
    };

    if total_bid < auction_data.initial_price {
        panic_with_error!(env, InputError::InitialPriceNotMet);
    }

    // Ties lose
    if total_bid <= auction_data.highest_bid {
        panic_with_error!(env, InputError::IncorrectAmountProvided);
    }

    if let Some(reserve_price) = auction_data.reserve_price {
        if total_bid > reserve_price {
            panic_with_error!(env, InputError::IncorrectAmountProvided);
        }

        if total_bid == reserve_price {
            log!(env, "reserve met, closing auction at {}", total_bid);
            auction_data.state = State::Closed;
        }
    }

    apply_extension(env, auction_data);

    distribution::transfer_to_contract(env, &auction_data.bid_asset, bidder, &amount);

    auction_data.highest_bidder = Some(bidder.clone());
    auction_data.highest_bid = total_bid;
    auction_data.deposits.set(bidder.clone(), total_bid);

    total_bid
}

/// Pushes `end_block` out when a bid lands close to the deadline.
pub(crate) fn apply_extension(env: &Env, auction_data: &mut Auction) {
    let height = env.ledger().sequence();

    // `check_can_bid` guarantees height <= end_block
    if auction_data.end_block - height <= EXTENSION_THRESHOLD {
        auction_data.end_block = match auction_data.end_block.checked_add(EXTENSION_DURATION) {
            Some(end_block) => end_block,
            None => panic_with_error!(env, InitError::AuctionDurationTooLong),
        };
        log!(env, "late bid, end block extended to {}", auction_data.end_block);
    }
}
