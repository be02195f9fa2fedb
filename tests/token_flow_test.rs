mod common;

use common::{test_data, TestContext};
use warden_auth::token::TokenIssuer;

#[tokio::test]
async fn test_token_issued_for_created_account() {
    println!("\n\n[+] Running test: test_token_issued_for_created_account");
    let ctx = TestContext::new().await;

    let user = ctx
        .registry
        .create_account(test_data::sample_account())
        .await
        .expect("account creation should succeed");

    // each deployment gets its own secret; tests are no different
    let issuer = TokenIssuer::new("flow-test-secret").unwrap();

    let token = issuer.issue(user.id).expect("issuance should succeed");
    let claims = issuer.decode(&token).expect("fresh token should verify");

    assert_eq!(claims.id, user.id);
    assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    println!("[/] Test passed: token carries the account id for seven days.");
}

#[tokio::test]
async fn test_token_survives_account_lookup_round_trip() {
    let ctx = TestContext::new().await;

    let user = ctx
        .registry
        .create_account(test_data::sample_account())
        .await
        .unwrap();

    let issuer = TokenIssuer::new("flow-test-secret").unwrap();
    let token = issuer.issue(user.id).unwrap();

    // the subject id in the claims resolves back to the stored account
    let claims = issuer.decode(&token).unwrap();
    let loaded = ctx.registry.find_account(claims.id).await.unwrap();
    assert_eq!(loaded.email, "alice@example.com");
}
