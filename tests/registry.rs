//! Process-wide registry flow
//!
//! Every test in this binary shares one global registry, so they all agree
//! on selecting regtest.

use std::sync::Arc;

use smail_params::chainparams::{
    params, params_for, select_params, try_params, ConfigError, Network, ParamsError,
};

#[test]
fn test_global_selection_flow() {
    let selected = select_params("regtest").unwrap();
    assert_eq!(selected.network_id(), "regtest");

    let again = select_params("regtest").unwrap();
    assert!(Arc::ptr_eq(&selected, &again));
    assert!(Arc::ptr_eq(&params(), &selected));
    assert!(try_params().is_some());
}

#[test]
fn test_rejected_names_do_not_change_selection() {
    select_params("regtest").unwrap();

    for name in ["mainnet", ""] {
        let err = select_params(name).unwrap_err();
        assert_eq!(err, ParamsError::Config(ConfigError::UnknownNetwork(name.to_string())));
        assert!(!err.is_fatal());
    }
    assert_eq!(params().network, Network::Regtest);
}

#[test]
fn test_switching_refused() {
    select_params("regtest").unwrap();

    let err = select_params("main").unwrap_err();
    assert_eq!(
        err,
        ParamsError::Config(ConfigError::AlreadySelected {
            active: "regtest",
            requested: "main",
        })
    );
    assert_eq!(params().network, Network::Regtest);
}

#[test]
fn test_params_for_other_network() {
    select_params("regtest").unwrap();

    let main = params_for(Network::Main).unwrap();
    assert_eq!(main.default_port, 9334);
    assert_eq!(main.message_start, [0xf9, 0xbe, 0xb4, 0xd9]);
    assert_eq!(params().network, Network::Regtest);
}

#[test]
fn test_regtest_values() {
    let p = select_params("regtest").unwrap();
    assert_eq!(p.default_port, 18444);
    assert_eq!(p.message_start, [0xfa, 0xbf, 0xb5, 0xda]);
    assert_eq!(p.genesis.header.nonce, 2);
    assert_eq!(p.genesis.header.bits, 0x207fffff);
    assert!(p.fixed_seeds.is_empty());
    assert!(p.dns_seeds.is_empty());
}
