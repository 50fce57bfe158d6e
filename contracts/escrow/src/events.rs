use soroban_sdk::{symbol_short, Address, Env};

pub(crate) fn listed(e: &Env, title: u32, buyer: &Address, purchase_price: i128, escrow_amount: i128) {
    e.events().publish(
        (symbol_short!("listed"), title),
        (buyer.clone(), purchase_price, escrow_amount),
    );
}

pub(crate) fn earnest(e: &Env, title: u32, amount: i128, balance: i128) {
    e.events()
        .publish((symbol_short!("earnest"), title), (amount, balance));
}

pub(crate) fn funded(e: &Env, title: u32, amount: i128, balance: i128) {
    e.events()
        .publish((symbol_short!("funded"), title), (amount, balance));
}

pub(crate) fn inspected(e: &Env, title: u32, passed: bool) {
    e.events().publish((symbol_short!("inspect"), title), passed);
}

pub(crate) fn approved(e: &Env, title: u32, party: &Address) {
    e.events()
        .publish((symbol_short!("approved"), title), party.clone());
}

pub(crate) fn finalized(e: &Env, title: u32, buyer: &Address, payout: i128) {
    e.events()
        .publish((symbol_short!("finalized"), title), (buyer.clone(), payout));
}

pub(crate) fn cancelled(e: &Env, title: u32, refunded: bool) {
    e.events()
        .publish((symbol_short!("cancelled"), title), refunded);
}
