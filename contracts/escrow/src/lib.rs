#![no_std]
//! Escrow for real-estate title sales.
//!
//! The seller hands a title to the contract and lists it for a designated
//! buyer. The buyer puts down earnest, the lender funds the rest, the
//! inspector signs off, and once seller, buyer and lender have all approved
//! the seller can finalize: the title goes to the buyer and the escrowed
//! balance goes to the seller in the same invocation.
//!
//! Every mutating call takes the acting identity as its first argument and
//! requires its authorization. Calls on an existing title then check, in
//! order: the title has an open listing, the caller holds the role, the
//! arguments are valid, and the sale is ready for the transition.

mod errors;
mod events;
mod registry;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

pub use crate::errors::{Error, ErrorKind};
pub use crate::registry::TitleRegistryClient;
pub use crate::types::{Approvals, Config, Listing, RelistPolicy};

#[contract]
pub struct Escrow;

#[contractimpl]
impl Escrow {
    pub fn __constructor(
        e: Env,
        nft_address: Address,
        payment_token: Address,
        seller: Address,
        inspector: Address,
        lender: Address,
        relist_policy: RelistPolicy,
    ) {
        storage::write_config(
            &e,
            &Config {
                nft_address,
                payment_token,
                seller,
                inspector,
                lender,
                relist_policy,
            },
        );
        storage::bump_instance(&e);
    }

    /// Seller lists `title` for `buyer`. Takes custody of the title from the
    /// seller unless the contract already holds it, which needs a prior
    /// registry approval for this contract.
    pub fn list(
        e: Env,
        caller: Address,
        title: u32,
        buyer: Address,
        purchase_price: i128,
        escrow_amount: i128,
    ) -> Result<(), Error> {
        caller.require_auth();
        let config = storage::read_config(&e);
        if caller != config.seller {
            return Err(Error::NotSeller);
        }
        if purchase_price <= 0 {
            return Err(Error::InvalidPrice);
        }
        if escrow_amount < 0 || escrow_amount > purchase_price {
            return Err(Error::InvalidAmount);
        }

        if let Some(current) = storage::read_listing(&e, title) {
            if current.listed {
                match config.relist_policy {
                    RelistPolicy::Reject => return Err(Error::AlreadyListed),
                    RelistPolicy::Overwrite if current.balance > 0 => {
                        return Err(Error::FundsLocked)
                    }
                    RelistPolicy::Overwrite => {}
                }
            }
        }

        let registry = TitleRegistryClient::new(&e, &config.nft_address);
        let me = e.current_contract_address();
        let owner = registry.owner_of(&title);
        if owner != me {
            if owner != config.seller {
                return Err(Error::NotTitleOwner);
            }
            registry.transfer_from(&me, &config.seller, &me, &title);
        }

        storage::write_listing(&e, title, &Listing::open(buyer.clone(), purchase_price, escrow_amount));
        storage::clear_sale_state(&e, title);
        storage::bump_instance(&e);

        log!(&e, "listed title", title, purchase_price, escrow_amount);
        events::listed(&e, title, &buyer, purchase_price, escrow_amount);
        Ok(())
    }

    /// Buyer puts earnest in escrow. Any positive amount is accepted and
    /// deposits accumulate; finalizing only needs the title's total balance
    /// to cover the purchase price.
    pub fn deposit_earnest(e: Env, caller: Address, title: u32, amount: i128) -> Result<(), Error> {
        caller.require_auth();
        let mut listing = Self::open_listing(&e, title)?;
        if caller != listing.buyer {
            return Err(Error::NotBuyer);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        listing.add_earnest(amount)?;
        storage::write_listing(&e, title, &listing);

        let config = storage::read_config(&e);
        token::Client::new(&e, &config.payment_token).transfer(
            &caller,
            &e.current_contract_address(),
            &amount,
        );

        events::earnest(&e, title, amount, listing.balance);
        Ok(())
    }

    /// Lender disburses financing toward the purchase price.
    pub fn fund_purchase(e: Env, caller: Address, title: u32, amount: i128) -> Result<(), Error> {
        caller.require_auth();
        let mut listing = Self::open_listing(&e, title)?;
        let config = storage::read_config(&e);
        if caller != config.lender {
            return Err(Error::NotLender);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        listing.add_financing(amount)?;
        storage::write_listing(&e, title, &listing);

        token::Client::new(&e, &config.payment_token).transfer(
            &caller,
            &e.current_contract_address(),
            &amount,
        );

        events::funded(&e, title, amount, listing.balance);
        Ok(())
    }

    pub fn change_inspection_status(e: Env, caller: Address, title: u32, passed: bool) -> Result<(), Error> {
        caller.require_auth();
        Self::open_listing(&e, title)?;
        let config = storage::read_config(&e);
        if caller != config.inspector {
            return Err(Error::NotInspector);
        }

        storage::write_inspection(&e, title, passed);
        events::inspected(&e, title, passed);
        Ok(())
    }

    /// Records the caller's approval. Only the seller, the listing's buyer and
    /// the lender take part; approving twice changes nothing.
    pub fn approve_sale(e: Env, caller: Address, title: u32) -> Result<(), Error> {
        caller.require_auth();
        let listing = Self::open_listing(&e, title)?;
        let config = storage::read_config(&e);

        let mut approvals = storage::read_approvals(&e, title);
        if caller == config.seller {
            approvals.seller = true;
        } else if caller == listing.buyer {
            approvals.buyer = true;
        } else if caller == config.lender {
            approvals.lender = true;
        } else {
            return Err(Error::NotParty);
        }

        storage::write_approvals(&e, title, &approvals);
        events::approved(&e, title, &caller);
        Ok(())
    }

    /// Completes the sale: the whole escrowed balance goes to the seller and
    /// the title goes to the buyer. Fails with the first unmet condition.
    pub fn finalize_sale(e: Env, caller: Address, title: u32) -> Result<(), Error> {
        caller.require_auth();
        let mut listing = Self::open_listing(&e, title)?;
        let config = storage::read_config(&e);
        if caller != config.seller {
            return Err(Error::NotSeller);
        }

        if !storage::read_inspection(&e, title) {
            return Err(Error::InspectionNotPassed);
        }
        let approvals = storage::read_approvals(&e, title);
        if !approvals.buyer {
            return Err(Error::BuyerNotApproved);
        }
        if !approvals.seller {
            return Err(Error::SellerNotApproved);
        }
        if !approvals.lender {
            return Err(Error::LenderNotApproved);
        }
        if listing.balance < listing.purchase_price {
            return Err(Error::InsufficientFunds);
        }

        let payout = listing.balance;
        listing.close();
        storage::write_listing(&e, title, &listing);
        storage::clear_sale_state(&e, title);

        let me = e.current_contract_address();
        token::Client::new(&e, &config.payment_token).transfer(&me, &config.seller, &payout);
        TitleRegistryClient::new(&e, &config.nft_address).transfer(&me, &listing.buyer, &title);

        log!(&e, "finalized title", title, payout);
        events::finalized(&e, title, &listing.buyer, payout);
        Ok(())
    }

    /// Calls the sale off. The buyer gets the earnest back if the inspection
    /// has not passed, otherwise it goes to the seller. Financing returns to
    /// the lender and the title returns to the seller.
    pub fn cancel_sale(e: Env, caller: Address, title: u32) -> Result<(), Error> {
        caller.require_auth();
        let mut listing = Self::open_listing(&e, title)?;
        let config = storage::read_config(&e);
        if caller != config.seller && caller != listing.buyer {
            return Err(Error::NotParty);
        }

        let refund_buyer = !storage::read_inspection(&e, title);
        let earnest = listing.earnest;
        let financing = listing.financing;
        listing.close();
        storage::write_listing(&e, title, &listing);
        storage::clear_sale_state(&e, title);

        let me = e.current_contract_address();
        let token = token::Client::new(&e, &config.payment_token);
        if earnest > 0 {
            let to = if refund_buyer { &listing.buyer } else { &config.seller };
            token.transfer(&me, to, &earnest);
        }
        if financing > 0 {
            token.transfer(&me, &config.lender, &financing);
        }
        TitleRegistryClient::new(&e, &config.nft_address).transfer(&me, &config.seller, &title);

        log!(&e, "cancelled title", title, refund_buyer);
        events::cancelled(&e, title, refund_buyer);
        Ok(())
    }

    pub fn nft_address(e: Env) -> Address {
        storage::read_config(&e).nft_address
    }

    pub fn payment_token(e: Env) -> Address {
        storage::read_config(&e).payment_token
    }

    pub fn seller(e: Env) -> Address {
        storage::read_config(&e).seller
    }

    pub fn inspector(e: Env) -> Address {
        storage::read_config(&e).inspector
    }

    pub fn lender(e: Env) -> Address {
        storage::read_config(&e).lender
    }

    pub fn relist_policy(e: Env) -> RelistPolicy {
        storage::read_config(&e).relist_policy
    }

    pub fn listing(e: Env, title: u32) -> Result<Listing, Error> {
        storage::read_listing(&e, title).ok_or(Error::UnknownTitle)
    }

    pub fn is_listed(e: Env, title: u32) -> bool {
        storage::read_listing(&e, title).is_some_and(|l| l.listed)
    }

    pub fn buyer(e: Env, title: u32) -> Result<Address, Error> {
        Self::listing(e, title).map(|l| l.buyer)
    }

    pub fn purchase_price(e: Env, title: u32) -> Result<i128, Error> {
        Self::listing(e, title).map(|l| l.purchase_price)
    }

    pub fn escrow_amount(e: Env, title: u32) -> Result<i128, Error> {
        Self::listing(e, title).map(|l| l.escrow_amount)
    }

    /// Funds held for `title` in the current sale cycle.
    pub fn escrow_balance(e: Env, title: u32) -> Result<i128, Error> {
        Self::listing(e, title).map(|l| l.balance)
    }

    pub fn inspection_passed(e: Env, title: u32) -> bool {
        storage::read_inspection(&e, title)
    }

    pub fn approvals(e: Env, title: u32) -> Approvals {
        storage::read_approvals(&e, title)
    }

    /// Whether `party` has approved the sale of `title`.
    pub fn approval(e: Env, title: u32, party: Address) -> bool {
        let config = storage::read_config(&e);
        let approvals = storage::read_approvals(&e, title);
        if party == config.seller {
            approvals.seller
        } else if party == config.lender {
            approvals.lender
        } else {
            approvals.buyer && storage::read_listing(&e, title).is_some_and(|l| l.buyer == party)
        }
    }

    /// Contract-wide balance of the payment token, across all titles.
    pub fn get_balance(e: Env) -> i128 {
        let config = storage::read_config(&e);
        token::Client::new(&e, &config.payment_token).balance(&e.current_contract_address())
    }

    fn open_listing(e: &Env, title: u32) -> Result<Listing, Error> {
        match storage::read_listing(e, title) {
            None => Err(Error::UnknownTitle),
            Some(listing) if !listing.listed => Err(Error::NotListed),
            Some(listing) => Ok(listing),
        }
    }
}
