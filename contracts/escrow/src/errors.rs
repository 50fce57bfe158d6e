use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,

    // caller role
    NotSeller = 10,
    NotBuyer = 11,
    NotInspector = 12,
    NotLender = 13,
    NotParty = 14,

    // sale state
    UnknownTitle = 20,
    NotListed = 21,
    AlreadyListed = 22,
    NotTitleOwner = 23,
    FundsLocked = 24,
    InspectionNotPassed = 25,
    BuyerNotApproved = 26,
    SellerNotApproved = 27,
    LenderNotApproved = 28,

    // arguments
    InvalidAmount = 30,
    InvalidPrice = 31,

    InsufficientFunds = 40,
}

/// Broad failure category of an [`Error`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The caller does not hold the role the operation is gated on.
    Authorization,
    /// The sale is not in a state that allows the transition.
    Precondition,
    /// An argument is malformed.
    Validation,
    /// The escrowed balance does not cover the purchase price.
    InsufficientFunds,
}

impl Error {
    pub const fn kind(self) -> ErrorKind {
        match self {
            Error::NotSeller
            | Error::NotBuyer
            | Error::NotInspector
            | Error::NotLender
            | Error::NotParty => ErrorKind::Authorization,
            Error::NotInitialized
            | Error::UnknownTitle
            | Error::NotListed
            | Error::AlreadyListed
            | Error::NotTitleOwner
            | Error::FundsLocked
            | Error::InspectionNotPassed
            | Error::BuyerNotApproved
            | Error::SellerNotApproved
            | Error::LenderNotApproved => ErrorKind::Precondition,
            Error::InvalidAmount | Error::InvalidPrice => ErrorKind::Validation,
            Error::InsufficientFunds => ErrorKind::InsufficientFunds,
        }
    }
}
