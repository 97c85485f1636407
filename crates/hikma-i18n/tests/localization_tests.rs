use hikma_i18n::{
    FluentValue, Language, LanguageChange, Localization, LocalizationError, TranslationTable,
};
use parking_lot::Mutex;
use rstest::{fixture, rstest};
use std::collections::HashMap;
use std::sync::Arc;

const EN: &str = r#"
nav =
    .home = Home
    .contact = Contact

calc =
    .revenue = Monthly revenue

welcome = Welcome, { $name }!
"#;

const AR: &str = r#"
nav =
    .home = الرئيسية

calc =
    .revenue = الإيرادات الشهرية

welcome = أهلاً، { $name }!
"#;

#[fixture]
fn localization() -> Localization {
    let table = TranslationTable::from_sources([(Language::En, EN), (Language::Ar, AR)]).unwrap();
    Localization::new(table).unwrap()
}

fn snapshot(localization: &Localization) -> (Language, bool, &'static str, Vec<String>) {
    let table = localization.table();
    let texts = table
        .keys(Language::En)
        .map(|key| localization.translate(key))
        .collect();
    (
        localization.language(),
        localization.is_rtl(),
        localization.direction_info().dir_attribute,
        texts,
    )
}

#[rstest]
fn starts_in_english(localization: Localization) {
    assert_eq!(localization.language(), Language::En);
    assert!(!localization.is_rtl());
}

#[rstest]
#[case(Language::En)]
#[case(Language::Ar)]
fn translate_is_total(localization: Localization, #[case] language: Language) {
    localization.set_language(language).unwrap();
    let keys: Vec<String> = localization
        .table()
        .keys(Language::En)
        .map(str::to_string)
        .collect();

    for key in keys {
        let text = localization.translate(&key);
        assert!(!text.is_empty());
        if !localization.table().contains(language, &key) {
            assert_eq!(text, key);
        }
    }
}

#[rstest]
fn direction_tracks_every_switch(localization: Localization) {
    for code in ["ar", "ar", "en", "ar", "en", "en"] {
        localization.set_language_code(code).unwrap();
        assert_eq!(localization.is_rtl(), localization.language() == Language::Ar);
        assert_eq!(localization.language().code(), code);
    }
}

#[rstest]
fn setting_current_language_changes_nothing(localization: Localization) {
    let changes = Arc::new(Mutex::new(Vec::<LanguageChange>::new()));
    let sink = Arc::clone(&changes);
    localization.subscribe(move |change| sink.lock().push(change));
    let before = snapshot(&localization);

    localization.set_language(Language::En).unwrap();

    assert_eq!(snapshot(&localization), before);
    assert!(changes.lock().is_empty());
}

#[rstest]
fn round_trip_restores_initial_state(localization: Localization) {
    let initial = snapshot(&localization);

    localization.set_language(Language::Ar).unwrap();
    assert_ne!(snapshot(&localization), initial);
    localization.set_language(Language::En).unwrap();

    assert_eq!(snapshot(&localization), initial);
}

#[rstest]
fn unsupported_code_is_rejected(localization: Localization) {
    localization.set_language(Language::Ar).unwrap();

    let result = localization.set_language_code("fr");

    assert!(matches!(
        result,
        Err(LocalizationError::UnsupportedLanguage(code)) if code == "fr"
    ));
    assert_eq!(localization.language(), Language::Ar);
    assert!(localization.is_rtl());
}

#[rstest]
fn missing_translation_falls_back_to_key(localization: Localization) {
    assert_eq!(localization.translate("nav.contact"), "Contact");

    localization.set_language(Language::Ar).unwrap();

    assert_eq!(localization.translate("nav.contact"), "nav.contact");
    assert_eq!(localization.localize("nav.contact", None), None);
}

#[rstest]
fn basic_lookup_in_both_languages(localization: Localization) {
    localization.set_language(Language::En).unwrap();
    assert_eq!(localization.translate("nav.home"), "Home");

    localization.set_language(Language::Ar).unwrap();
    assert_eq!(localization.translate("nav.home"), "الرئيسية");
}

#[rstest]
fn scope_carries_current_direction(localization: Localization) {
    let scope = localization.scope().unwrap();

    localization.set_language(Language::Ar).unwrap();
    let subtree = scope.wrap("<main></main>");
    assert_eq!(subtree.dir_attribute(), "rtl");
    assert!(subtree.to_string().starts_with(r#"<div dir="rtl" lang="ar""#));

    localization.set_language(Language::En).unwrap();
    assert_eq!(scope.wrap("<main></main>").dir_attribute(), "ltr");
}

#[rstest]
fn subscribers_see_switch_before_set_returns(localization: Localization) {
    let localization = Arc::new(localization);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let (reader, sink) = (Arc::clone(&localization), Arc::clone(&seen));
    localization.subscribe(move |change| {
        sink.lock()
            .push((change.current, reader.is_rtl(), reader.translate("nav.home")));
    });

    localization.set_language(Language::Ar).unwrap();

    assert_eq!(
        *seen.lock(),
        vec![(Language::Ar, true, "الرئيسية".to_string())]
    );
}

#[rstest]
fn arguments_are_formatted(localization: Localization) {
    let args = HashMap::from([("name", FluentValue::from("Omar"))]);

    assert_eq!(localization.translate_with_args("welcome", &args), "Welcome, Omar!");
    localization.set_language(Language::Ar).unwrap();
    assert_eq!(localization.translate_with_args("welcome", &args), "أهلاً، Omar!");
}

#[rstest]
fn sessions_do_not_share_language() {
    let table = Arc::new(
        TranslationTable::from_sources([(Language::En, EN), (Language::Ar, AR)]).unwrap(),
    );
    let first = Localization::new(Arc::clone(&table)).unwrap();
    let second = Localization::new(table).unwrap();

    first.set_language(Language::Ar).unwrap();

    assert_eq!(first.language(), Language::Ar);
    assert_eq!(second.language(), Language::En);
}
