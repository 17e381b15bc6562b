use photoprod_recon::decay::{decay_labels, UNKNOWN_PLAIN_LABEL, UNKNOWN_TYPESET_LABEL};

#[test]
fn four_pion_channel_resolves_both_labels() {
    let labels = decay_labels(443211);
    assert_eq!(labels.plain, "jpsi_4pi");
    assert!(labels.typeset.contains(r"\pi^{+}\pi^{-}\pi^{+}\pi^{-}"));
    assert!(!labels.is_unknown());
}

#[test]
fn kaon_pion_channel_resolves() {
    let labels = decay_labels(443321211);
    assert_eq!(labels.plain, "jpsi_2K2pi");
    assert!(labels.typeset.starts_with(r"J/\psi"));
}

#[test]
fn unknown_channel_falls_back_to_sentinels() {
    let labels = decay_labels(12345);
    assert_eq!(labels.plain, UNKNOWN_PLAIN_LABEL);
    assert_eq!(labels.typeset, UNKNOWN_TYPESET_LABEL);
    assert!(labels.is_unknown());
}

#[test]
fn channel_codes_are_signed() {
    assert!(decay_labels(-443211).is_unknown());
}

#[test]
fn typeset_catalog_is_pinned() {
    let expected = [
        (443011, "J/#psi #rightarrow e^{+}e^{-}"),
        (443013, "J/#psi #rightarrow #mu^{+}#mu^{-}"),
        (443211, r"J/\psi \rightarrow \pi^{+}\pi^{-}\pi^{+}\pi^{-}"),
        (443321211, r"J/\psi \rightarrow K^{+}K^{-}\pi^{+}\pi^{-}"),
        (4432212, "J/#psi #rightarrow p#bar{p}"),
    ];
    for (code, typeset) in expected {
        assert_eq!(decay_labels(code).typeset, typeset, "channel {code}");
    }
}

#[test]
fn dilepton_and_proton_channels_have_no_plain_label() {
    for code in [443011, 443013, 4432212] {
        let labels = decay_labels(code);
        assert_eq!(labels.plain, UNKNOWN_PLAIN_LABEL, "channel {code}");
        assert!(!labels.is_unknown());
    }
}
