// Anti-sniping: a bid landing this many blocks (or fewer) before `end_block`
// pushes the deadline out by `EXTENSION_DURATION`.
pub const EXTENSION_THRESHOLD: u32 = 5;
pub const EXTENSION_DURATION: u32 = 5;

// Ledgers are ~5s apart, so a day is roughly 17280 ledgers.
pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_TTL_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

// Auctions are kept as a historical record, so their entries are bumped on
// every access.
pub const PERSISTENT_TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
