use soroban_sdk::{panic_with_error, Address, Env};

use crate::{
    errors::{AccessError, InitError, InputError, UserError},
    types::*,
};

/// Validates the parameters of a new auction.
pub fn validate_creation(
    env: &Env,
    duration: u32,
    initial_price: i128,
    reserve_price: Option<i128>,
    sell_asset_amount: i128,
) {
    // A reserve is a ceiling above the opening price
    if let Some(reserve_price) = reserve_price {
        if reserve_price <= initial_price {
            panic_with_error!(env, InitError::ReserveLessThanInitialPrice);
        }
    }

    if duration == 0 {
        panic_with_error!(env, InitError::AuctionDurationNotProvided);
    }

    if initial_price <= 0 {
        panic_with_error!(env, InitError::InitialPriceCannotBeZero);
    }

    if sell_asset_amount <= 0 {
        panic_with_error!(env, InputError::IncorrectAmountProvided);
    }
}

impl Auction {
    pub fn is_open(&self) -> bool {
        self.state == State::Open
    }

    pub fn is_closed(&self) -> bool {
        self.state == State::Closed
    }

    /// Bids and cancellation are accepted up to and including `end_block`.
    pub fn accepts_actions(&self, height: u32) -> bool {
        self.is_open() && height <= self.end_block
    }

    /// Withdrawal is possible once closed or once `end_block` is reached.
    pub fn can_withdraw(&self, height: u32) -> bool {
        self.is_closed() || height >= self.end_block
    }

    pub fn deposit_of(&self, identity: &Address) -> Option<i128> {
        self.deposits.get(identity.clone())
    }

    pub fn check_can_bid(&self, env: &Env, bidder: &Address, asset: &Address, amount: i128) {
        if *bidder == self.seller {
            panic_with_error!(env, UserError::BidderIsSeller);
        }

        if !self.accepts_actions(env.ledger().sequence()) {
            panic_with_error!(env, AccessError::AuctionIsNotOpen);
        }

        if *asset != self.bid_asset {
            panic_with_error!(env, InputError::IncorrectAssetProvided);
        }

        if amount < 0 {
            panic_with_error!(env, InputError::IncorrectAmountProvided);
        }
    }

    pub fn check_can_cancel(&self, env: &Env, caller: &Address) {
        if !self.accepts_actions(env.ledger().sequence()) {
            panic_with_error!(env, AccessError::AuctionIsNotOpen);
        }

        if *caller != self.seller {
            panic_with_error!(env, AccessError::SenderIsNotSeller);
        }
    }

    pub fn check_can_withdraw(&self, env: &Env) {
        if !self.can_withdraw(env.ledger().sequence()) {
            panic_with_error!(env, AccessError::AuctionIsNotClosed);
        }
    }
}
