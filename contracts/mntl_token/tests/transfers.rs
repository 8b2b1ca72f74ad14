#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use mntl_token::TokenError;
use setup::{mntl, TestEnv};

#[test]
fn test_transfer_and_transfer_from_after_detach() {
    let t = TestEnv::new();
    let investor1 = t.user();
    let investor2 = t.user();
    t.fund(&investor1, mntl(20));

    t.client.approve(&investor1, &t.owner, &mntl(10));
    t.client.transfer(&investor1, &investor2, &mntl(10));
    t.client.transfer_from(&t.owner, &investor1, &investor2, &mntl(10));

    assert_eq!(t.client.balance(&investor1), 0);
    assert_eq!(t.client.balance(&investor2), mntl(20));
    assert_eq!(t.client.allowance(&investor1, &t.owner), 0);
}

#[test]
fn test_transfers_locked_while_controller_attached() {
    let t = TestEnv::new();
    let investor1 = t.user();
    let investor2 = t.user();
    t.install_controller();
    t.client.buy(&investor1, &mntl(5));

    assert_eq!(
        t.client.try_transfer(&investor1, &investor2, &mntl(1)),
        Err(Ok(TokenError::TransferLocked))
    );
    assert_eq!(
        t.client.try_approve(&investor1, &investor2, &mntl(1)),
        Err(Ok(TokenError::TransferLocked))
    );
    assert_eq!(
        t.client.try_transfer_from(&investor2, &investor1, &investor2, &mntl(1)),
        Err(Ok(TokenError::TransferLocked))
    );

    // A venda devolve o controle: libera
    t.client.detach_controller();
    t.client.transfer(&investor1, &investor2, &mntl(1));
    assert_eq!(t.client.balance(&investor2), mntl(1));
}

#[test]
fn test_transfers_blocked_while_paused() {
    let t = TestEnv::new();
    let investor1 = t.user();
    let investor2 = t.user();
    t.fund(&investor1, mntl(5));
    t.client.approve(&investor1, &t.owner, &mntl(5));

    t.client.pause(&t.owner);

    assert_eq!(
        t.client.try_transfer(&investor1, &investor2, &mntl(1)),
        Err(Ok(TokenError::Paused))
    );
    assert_eq!(
        t.client.try_transfer_from(&t.owner, &investor1, &investor2, &mntl(1)),
        Err(Ok(TokenError::Paused))
    );
    assert_eq!(
        t.client.try_approve(&investor1, &investor2, &mntl(1)),
        Err(Ok(TokenError::Paused))
    );

    t.client.unpause(&t.owner);
    t.client.transfer(&investor1, &investor2, &mntl(1));
    t.client.transfer_from(&t.owner, &investor1, &investor2, &mntl(1));
    assert_eq!(t.client.balance(&investor2), mntl(2));
}

#[test]
fn test_transfer_more_than_balance_fails() {
    let t = TestEnv::new();
    let investor1 = t.user();
    let investor2 = t.user();
    t.fund(&investor1, mntl(1));

    let res = t.client.try_transfer(&investor1, &investor2, &(mntl(1) + 1));
    assert_eq!(res, Err(Ok(TokenError::InsufficientBalance)));
}

#[test]
fn test_transfer_from_needs_allowance() {
    let t = TestEnv::new();
    let investor1 = t.user();
    let investor2 = t.user();
    t.fund(&investor1, mntl(10));
    t.client.approve(&investor1, &investor2, &mntl(3));

    let res = t.client.try_transfer_from(&investor2, &investor1, &investor2, &mntl(4));
    assert_eq!(res, Err(Ok(TokenError::InsufficientAllowance)));

    t.client.transfer_from(&investor2, &investor1, &investor2, &mntl(3));
    assert_eq!(t.client.allowance(&investor1, &investor2), 0);
}

#[test]
fn test_approve_zero_revokes() {
    let t = TestEnv::new();
    let investor1 = t.user();
    let investor2 = t.user();
    t.client.approve(&investor1, &investor2, &mntl(3));
    t.client.approve(&investor1, &investor2, &0);

    assert_eq!(t.client.allowance(&investor1, &investor2), 0);
    assert_eq!(
        t.client.try_approve(&investor1, &investor2, &-1),
        Err(Ok(TokenError::InvalidAmount))
    );
}

#[test]
fn test_transfer_to_self_keeps_balance() {
    let t = TestEnv::new();
    let investor = t.user();
    t.fund(&investor, mntl(7));

    t.client.transfer(&investor, &investor, &mntl(3));
    assert_eq!(t.client.balance(&investor), mntl(7));
    assert_eq!(t.client.total_supply(), mntl(7));
}
