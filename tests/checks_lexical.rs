use linkshield::checks::lexical;
use linkshield::Verdict;

#[test]
fn plain_https_url_is_clean() {
    let (score, findings) = lexical::evaluate("https://example.com");
    assert_eq!(score, 0);
    assert_eq!(findings, vec!["uses https".to_string()]);
    assert_eq!(Verdict::from_score(score), Verdict::Safe);
}

#[test]
fn paypal_login_tk_is_phishing() {
    let (score, findings) = lexical::evaluate("http://paypal-login.tk/verify");
    assert_eq!(score, 7);
    assert_eq!(Verdict::from_score(score), Verdict::Phishing);

    assert!(findings.iter().any(|f| f == "does not use https"));
    assert!(findings
        .iter()
        .any(|f| f.starts_with("suspicious keywords found:")
            && f.contains("LOGIN")
            && f.contains("VERIFY")));
    assert!(findings
        .iter()
        .any(|f| f.starts_with("possible brand impersonation:") && f.contains("PAYPAL")));
    assert!(findings
        .iter()
        .any(|f| f == "suspicious domain extension detected"));
}

#[test]
fn ip_literal_url_is_flagged() {
    let (score, findings) = lexical::evaluate("http://192.168.1.5/account");
    assert!(findings
        .iter()
        .any(|f| f == "uses ip address instead of domain"));
    // no-https (+2), keyword "account" (+2), ip literal (+2)
    assert_eq!(score, 6);
}

#[test]
fn symbol_flood_contributes_one_point_per_symbol() {
    // four '-' characters and nothing else suspicious
    let (score, findings) = lexical::evaluate("https://ex.com/a-b-c-d-e");
    assert_eq!(score, 1);
    assert_eq!(
        findings,
        vec![
            "uses https".to_string(),
            "too many '-' symbols detected".to_string(),
        ]
    );
}

#[test]
fn findings_follow_rule_order() {
    let url = format!(
        "http://paypal-login-verify-secure.tk/10.20.30.40/a=b=c=d?{}",
        "x".repeat(60)
    );
    let (_, findings) = lexical::evaluate(&url);
    let expected = vec![
        "does not use https".to_string(),
        "suspicious keywords found: LOGIN, VERIFY, SECURE".to_string(),
        "possible brand impersonation: PAYPAL".to_string(),
        "uses ip address instead of domain".to_string(),
        "suspicious domain extension detected".to_string(),
        "too many '-' symbols detected".to_string(),
        "too many '=' symbols detected".to_string(),
        "url length is unusually long".to_string(),
    ];
    assert_eq!(findings, expected);
}
