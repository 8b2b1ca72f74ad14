#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use mntl_token::{Stage, TokenError};
use setup::TestEnv;

#[test]
fn test_enter_private_sale_sets_stage_and_controller() {
    let t = TestEnv::new();
    let controller = t.user();

    t.client.enter_private_sale(&t.owner, &controller);

    assert_eq!(t.client.stage(), Stage::PrivateSale);
    assert_eq!(t.client.controller(), Some(controller));
}

#[test]
fn test_stages_advance_in_order() {
    let t = TestEnv::new();

    t.client.enter_private_sale(&t.owner, &t.user());
    t.client.enter_second_private_sale(&t.owner, &t.user());
    t.client.enter_pre_sale(&t.owner, &t.user());
    let last = t.user();
    t.client.enter_sale(&t.owner, &last);

    assert_eq!(t.client.stage(), Stage::Sale);
    assert_eq!(t.client.controller(), Some(last));
}

#[test]
fn test_skipping_stages_is_allowed() {
    let t = TestEnv::new();

    t.client.enter_pre_sale(&t.owner, &t.user());
    assert_eq!(t.client.stage(), Stage::PreSale);
}

#[test]
fn test_backward_transition_fails_and_keeps_state() {
    let t = TestEnv::new();
    let controller = t.user();
    t.client.enter_pre_sale(&t.owner, &controller);

    let res = t.client.try_enter_private_sale(&t.owner, &t.user());
    assert_eq!(res, Err(Ok(TokenError::InvalidStageTransition)));

    let res = t.client.try_enter_second_private_sale(&t.owner, &t.user());
    assert_eq!(res, Err(Ok(TokenError::InvalidStageTransition)));

    // Nada mudou
    assert_eq!(t.client.stage(), Stage::PreSale);
    assert_eq!(t.client.controller(), Some(controller));
}

#[test]
fn test_repeating_current_stage_fails() {
    let t = TestEnv::new();
    t.client.enter_private_sale(&t.owner, &t.user());

    let res = t.client.try_enter_private_sale(&t.owner, &t.user());
    assert_eq!(res, Err(Ok(TokenError::InvalidStageTransition)));
}

#[test]
fn test_sale_is_terminal() {
    let t = TestEnv::new();
    t.client.enter_sale(&t.owner, &t.user());

    assert!(t.client.try_enter_sale(&t.owner, &t.user()).is_err());
    assert!(t.client.try_enter_pre_sale(&t.owner, &t.user()).is_err());
}

#[test]
fn test_only_owner_enters_stage() {
    let t = TestEnv::new();
    let nobody = t.user();

    let res = t.client.try_enter_private_sale(&nobody, &nobody);
    assert_eq!(res, Err(Ok(TokenError::Unauthorized)));
    assert_eq!(t.client.stage(), Stage::None);
}

#[test]
fn test_set_controller_keeps_stage() {
    let t = TestEnv::new();
    let controller = t.user();

    t.client.set_controller(&t.owner, &controller);

    assert_eq!(t.client.controller(), Some(controller));
    assert_eq!(t.client.stage(), Stage::None);
}

#[test]
fn test_set_controller_requires_owner() {
    let t = TestEnv::new();
    let nobody = t.user();

    let res = t.client.try_set_controller(&nobody, &nobody);
    assert_eq!(res, Err(Ok(TokenError::Unauthorized)));
}

#[test]
fn test_detach_controller() {
    let t = TestEnv::new();
    t.install_controller();

    t.client.detach_controller();
    assert_eq!(t.client.controller(), None);
}

#[test]
fn test_detach_without_controller_fails() {
    let t = TestEnv::new();

    let res = t.client.try_detach_controller();
    assert_eq!(res, Err(Ok(TokenError::Unauthorized)));
}
