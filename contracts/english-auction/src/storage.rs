use soroban_sdk::{contracttype, Env};

use crate::constants::*;
use crate::types::Auction;

/// Enum representing keys used to store contract data in Soroban storage.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    TotalAuctions, // Number of auctions ever created, also the next id
    Auction(u32),  // Auction record by id
}

/// Keyed access to auction records and the id counter.
///
/// Every transition reads the full record, mutates it and writes it back
/// through `save`, so there is never a partially updated auction.
pub struct AuctionStore<'a> {
    env: &'a Env,
}

impl<'a> AuctionStore<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    pub fn total_auctions(&self) -> u32 {
        let total = self
            .env
            .storage()
            .instance()
            .get::<DataKey, u32>(&DataKey::TotalAuctions)
            .unwrap_or(0);
        self.bump_instance();
        total
    }

    pub fn get(&self, auction_id: u32) -> Option<Auction> {
        let key = DataKey::Auction(auction_id);
        let auction = self
            .env
            .storage()
            .persistent()
            .get::<DataKey, Auction>(&key);
        if auction.is_some() {
            self.env.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_TTL_THRESHOLD,
                PERSISTENT_TTL_AMOUNT,
            );
        }
        auction
    }

    pub fn save(&self, auction_id: u32, auction: &Auction) {
        let key = DataKey::Auction(auction_id);
        self.env.storage().persistent().set(&key, auction);
        self.env
            .storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }

    /// Stores `auction` under the next sequential id and returns that id.
    pub fn insert(&self, auction: &Auction) -> u32 {
        let auction_id = self.total_auctions();
        self.save(auction_id, auction);
        self.env
            .storage()
            .instance()
            .set(&DataKey::TotalAuctions, &(auction_id + 1));
        self.bump_instance();
        auction_id
    }

    fn bump_instance(&self) {
        self.env
            .storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
    }
}
