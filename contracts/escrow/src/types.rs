use soroban_sdk::{contracttype, Address};

use crate::errors::Error;

/// What `list` does when the title already has an open listing.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RelistPolicy {
    Reject,
    /// Replace the terms and restart inspection and approvals, as long as
    /// nothing has been deposited yet.
    Overwrite,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub nft_address: Address,
    pub payment_token: Address,
    pub seller: Address,
    pub inspector: Address,
    pub lender: Address,
    pub relist_policy: RelistPolicy,
}

/// Sale terms and escrow ledger for one title.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    pub buyer: Address,
    pub purchase_price: i128,
    /// Earnest the buyer is asked to put down.
    pub escrow_amount: i128,
    pub listed: bool,
    /// Total held for this title, always `earnest + financing`.
    pub balance: i128,
    pub earnest: i128,
    pub financing: i128,
}

impl Listing {
    pub fn open(buyer: Address, purchase_price: i128, escrow_amount: i128) -> Self {
        Listing {
            buyer,
            purchase_price,
            escrow_amount,
            listed: true,
            balance: 0,
            earnest: 0,
            financing: 0,
        }
    }

    pub fn add_earnest(&mut self, amount: i128) -> Result<(), Error> {
        let earnest = self.earnest.checked_add(amount).ok_or(Error::InvalidAmount)?;
        let balance = self.balance.checked_add(amount).ok_or(Error::InvalidAmount)?;
        self.earnest = earnest;
        self.balance = balance;
        Ok(())
    }

    pub fn add_financing(&mut self, amount: i128) -> Result<(), Error> {
        let financing = self.financing.checked_add(amount).ok_or(Error::InvalidAmount)?;
        let balance = self.balance.checked_add(amount).ok_or(Error::InvalidAmount)?;
        self.financing = financing;
        self.balance = balance;
        Ok(())
    }

    /// Closes the sale cycle. Terms stay readable; the ledger is emptied.
    pub fn close(&mut self) {
        self.listed = false;
        self.balance = 0;
        self.earnest = 0;
        self.financing = 0;
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Approvals {
    pub seller: bool,
    pub buyer: bool,
    pub lender: bool,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Listing(u32),
    Inspection(u32),
    Approvals(u32),
}
