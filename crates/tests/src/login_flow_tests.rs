use nyaya_types::{submit_login, InstantDelay, LoginForm, LoginOutcome, LoginStage};
use pretty_assertions::assert_eq;

use crate::common::test_config;

#[tokio::test]
async fn test_two_factor_sends_code_then_signs_in() {
    let config = test_config();
    assert!(config.features.two_factor);

    let mut form = LoginForm {
        email: "sita.officer@police.gov.np".into(),
        password: "secret".into(),
        ..Default::default()
    };

    let first = submit_login(&InstantDelay, &config, &form).await.unwrap();
    assert_eq!(first, LoginOutcome::OtpSent);
    form.apply(&first);
    assert_eq!(form.stage, LoginStage::OtpSent);
    assert!(form.shows_otp());
    assert_eq!(form.email, "sita.officer@police.gov.np");

    form.otp = "123456".into();
    let second = submit_login(&InstantDelay, &config, &form).await.unwrap();
    assert_eq!(
        second,
        LoginOutcome::SignedIn {
            user: "sita.officer".into()
        }
    );
    form.apply(&second);
    assert_eq!(form, LoginForm::default());
}

#[tokio::test]
async fn test_without_two_factor_first_submit_signs_in() {
    let mut config = test_config();
    config.features.two_factor = false;
    let form = LoginForm {
        email: "".into(),
        ..Default::default()
    };

    let outcome = submit_login(&InstantDelay, &config, &form).await.unwrap();
    assert_eq!(
        outcome,
        LoginOutcome::SignedIn {
            user: "Officer".into()
        }
    );
}
