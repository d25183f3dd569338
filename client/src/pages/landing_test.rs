use super::*;

#[test]
fn landing_shows_three_features() {
    assert_eq!(FEATURES.len(), 3);
}

#[test]
fn feature_titles_are_unique_and_non_empty() {
    for (i, a) in FEATURES.iter().enumerate() {
        assert!(!a.title.is_empty());
        assert!(!a.description.is_empty());
        for b in &FEATURES[i + 1..] {
            assert_ne!(a.title, b.title);
        }
    }
}

#[test]
fn call_to_action_leads_to_registration() {
    assert_eq!(CTA_TARGET, "/register");
}

#[test]
fn feature_copy_is_the_full_marketing_text() {
    assert_eq!(FEATURES[0].description, "Dive into the stock market and explore the dynamics");
    assert!(FEATURES[1].description.contains("Stay engaged with the stock market as the streak feature prompts"));
    assert!(FEATURES[2].description.starts_with("Experience a new level of precision"));
    assert!(FEATURES[2].description.ends_with("stay ahead in the stock market game."));
}
