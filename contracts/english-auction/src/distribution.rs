use soroban_sdk::{token, Address, Env};

use crate::types::Payout;

// Pull `amount` of `asset` from `from` into escrow
pub fn transfer_to_contract(env: &Env, asset: &Address, from: &Address, amount: &i128) {
    token::Client::new(env, asset).transfer(from, &env.current_contract_address(), amount);
}

// Release a payout from escrow
pub fn release(env: &Env, to: &Address, payout: &Payout) {
    token::Client::new(env, &payout.asset).transfer(
        &env.current_contract_address(),
        to,
        &payout.amount,
    );
}
