//! Grouping invariants checked over generated article lists

use simplepedia::{Article, SectionIndex, SimplepediaError, collation, parse_edited};

/// Deterministic pseudo-random titles covering case, accents and digits
fn generate_titles(count: usize, seed: u64) -> Vec<String> {
    const FIRST: [&str; 12] = ["a", "B", "c", "É", "é", "Ö", "z", "Z", "7", "k", "Ł", "m"];
    const REST: [&str; 6] = ["lpha", "eta", "ñu", "ork", " two", "ébec"];

    let mut state = seed;
    (0..count)
        .map(|i| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let first = FIRST[(state >> 33) as usize % FIRST.len()];
            let rest = REST[(state >> 17) as usize % REST.len()];
            format!("{first}{rest} {i}")
        })
        .collect()
}

fn articles_from(titles: &[String]) -> Vec<Article> {
    let edited = parse_edited("2017-05-08").unwrap();
    titles.iter().map(|t| Article::new(t.as_str(), "", edited)).collect()
}

#[test]
fn test_no_article_lost_or_duplicated() {
    for seed in 1..=20 {
        let articles = articles_from(&generate_titles(200, seed));
        let index = SectionIndex::build(&articles).unwrap();

        let total: usize = index
            .list_sections()
            .iter()
            .map(|label| index.articles_in_section(label).len())
            .sum();
        assert_eq!(total, articles.len(), "seed {seed}");
    }
}

#[test]
fn test_each_article_in_exactly_its_bucket() {
    let articles = articles_from(&generate_titles(300, 7));
    let index = SectionIndex::build(&articles).unwrap();

    for article in &articles {
        let label = article.section_label();
        for section in index.list_sections() {
            let count = index
                .bucket(&section)
                .iter()
                .filter(|a| *a == article)
                .count();
            let expected = if section == label { 1 } else { 0 };
            assert_eq!(count, expected, "{} in section {}", article.title(), section);
        }
    }
}

#[test]
fn test_sections_sorted_distinct_nonempty() {
    let articles = articles_from(&generate_titles(300, 11));
    let index = SectionIndex::build(&articles).unwrap();
    let sections = index.list_sections();

    assert!(sections.windows(2).all(|w| w[0] < w[1]));
    assert!(sections.iter().all(|s| !index.bucket(s).is_empty()));
}

#[test]
fn test_articles_in_section_sorted_and_idempotent() {
    let articles = articles_from(&generate_titles(300, 13));
    let index = SectionIndex::build(&articles).unwrap();

    for section in index.list_sections() {
        let first = index.articles_in_section(&section);
        assert!(first.windows(2).all(|w| {
            collation::compare(w[0].title(), w[1].title()) != std::cmp::Ordering::Greater
        }));
        assert_eq!(first, index.articles_in_section(&section));
    }
}

#[test]
fn test_build_is_permutation_invariant() {
    let titles = generate_titles(150, 17);
    let mut shuffled = titles.clone();
    shuffled.rotate_left(53);
    shuffled.reverse();

    let a = SectionIndex::build(&articles_from(&titles)).unwrap();
    let b = SectionIndex::build(&articles_from(&shuffled)).unwrap();

    assert_eq!(a.list_sections(), b.list_sections());
    for section in a.list_sections() {
        assert_eq!(a.articles_in_section(&section), b.articles_in_section(&section));
    }
}

#[test]
fn test_build_does_not_mutate_input() {
    let articles = articles_from(&generate_titles(50, 19));
    let copy = articles.clone();
    SectionIndex::build(&articles).unwrap();
    assert_eq!(articles, copy);
}

#[test]
fn test_missing_section_is_empty_not_error() {
    let index = SectionIndex::build(&articles_from(&generate_titles(50, 23))).unwrap();
    assert!(index.articles_in_section("no such label").is_empty());
}

#[test]
fn test_empty_title_fails_whole_build() {
    let mut articles = articles_from(&generate_titles(10, 29));
    articles.push(Article::new("", "", parse_edited("2017-05-08").unwrap()));
    assert!(matches!(
        SectionIndex::build(&articles),
        Err(SimplepediaError::InvalidArticle(_))
    ));
}
