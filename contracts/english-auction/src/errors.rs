use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum InitError {
    AuctionDurationNotProvided = 101,
    InitialPriceCannotBeZero = 102,
    ReserveLessThanInitialPrice = 103,
    AuctionDurationTooLong = 104,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum InputError {
    AuctionDoesNotExist = 201,
    IncorrectAmountProvided = 202,
    IncorrectAssetProvided = 203,
    InitialPriceNotMet = 204,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AccessError {
    AuctionIsNotClosed = 301,
    AuctionIsNotOpen = 302,
    SenderIsNotSeller = 303,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum UserError {
    BidderIsSeller = 401,
    UserHasAlreadyWithdrawn = 402,
}
