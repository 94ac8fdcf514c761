//! Worked examples for the section index and the store that rebuilds it

use simplepedia::{Article, ArticleStore, Config, FixedClock, SectionIndex, parse_edited};

fn article(title: &str) -> Article {
    Article::new(title, format!("About {}", title), parse_edited("2017-05-08").unwrap())
}

fn store() -> ArticleStore<FixedClock> {
    let articles = vec![article("Alpha Centauri"), article("Auton"), article("Dalek")];
    let clock = FixedClock(parse_edited("2018-01-01").unwrap());
    ArticleStore::with_clock(articles, Config::default(), clock).unwrap()
}

#[test]
fn test_alpha_auton_dalek() {
    let articles = vec![article("Alpha Centauri"), article("Auton"), article("Dalek")];
    let index = SectionIndex::build(&articles).unwrap();

    assert_eq!(index.list_sections(), vec!["A", "D"]);
    assert_eq!(index.titles_in_section("A"), vec!["Alpha Centauri", "Auton"]);
}

#[test]
fn test_create_adds_section() {
    let mut store = store();
    store.create("Zorg", "...").unwrap();

    assert!(store.index().list_sections().contains(&"Z".to_string()));
    assert_eq!(store.index().titles_in_section("Z"), vec!["Zorg"]);
}

#[test]
fn test_update_keeps_section_and_restamps() {
    let mut store = store();
    let before = store.get("Dalek").unwrap().edited();

    store.update("Dalek", "Dalek", "new extract").unwrap();

    let bucket = store.index().articles_in_section("D");
    let dalek = &bucket[0];
    assert_eq!(dalek.title(), "Dalek");
    assert_eq!(dalek.extract(), "new extract");
    assert_ne!(dalek.edited(), before);
    assert_eq!(dalek.edited(), parse_edited("2018-01-01").unwrap());
}

#[test]
fn test_rename_moves_bucket() {
    let mut store = store();
    store.update("Dalek", "Ecks", "renamed").unwrap();

    let index = store.index();
    assert!(!index.contains_section("D"));
    assert_eq!(index.titles_in_section("E"), vec!["Ecks"]);
    assert_eq!(index.list_sections(), vec!["A", "E"]);
}

#[test]
fn test_sibling_in_old_section_survives_rename() {
    let mut store = store();
    store.create("Dominators", "Galactic bullies with funny robot pals.").unwrap();
    store.update("Dalek", "Ecks", "").unwrap();

    assert_eq!(store.index().titles_in_section("D"), vec!["Dominators"]);
}

#[test]
fn test_diacritics_sort_naturally() {
    let articles = vec![
        article("Ecru"),
        article("Éclair"),
        article("Eclipse"),
        article("eagle"),
    ];
    let index = SectionIndex::build(&articles).unwrap();

    // Lowercase and unaccented E titles share a section; É has its own label
    assert_eq!(index.list_sections(), vec!["E", "É"]);
    assert_eq!(index.titles_in_section("E"), vec!["eagle", "Eclipse", "Ecru"]);
}

#[test]
fn test_letters_without_decomposition_sort_in_place() {
    let articles = vec![
        article("Sten"),
        article("Strat"),
        article("Straße"),
        article("Søren"),
        article("Wamp"),
        article("Wałek"),
    ];
    let index = SectionIndex::build(&articles).unwrap();

    assert_eq!(index.list_sections(), vec!["S", "W"]);
    assert_eq!(index.titles_in_section("S"), vec!["Søren", "Sten", "Straße", "Strat"]);
    assert_eq!(index.titles_in_section("W"), vec!["Wałek", "Wamp"]);
}
