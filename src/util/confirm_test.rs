#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn confirm_declines_without_a_browser() {
    assert!(!confirm("Are you sure?"));
}
