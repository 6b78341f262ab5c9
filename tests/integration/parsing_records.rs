//! Fixture-based record extraction tests (no network)

mod common;

use common::{article_set, article_xml, read_fixture};
use pubmed_fetcher::pubmed::parse_records;
use pubmed_fetcher::{Record, render_report};
use rstest::rstest;
use tracing_test::traced_test;

fn full_article(pmid: &str) -> String {
    article_xml(
        Some(pmid),
        Some("T1"),
        Some("J1"),
        Some("2020"),
        Some("1-5"),
        &[("Jane", "Doe")],
    )
}

#[test]
fn test_fixture_records_in_document_order() {
    let parsed = parse_records(&read_fixture("sufu_efetch.xml")).unwrap();

    let ids: Vec<&str> = parsed.records.iter().map(|r| r.pmid.as_str()).collect();
    assert_eq!(ids, vec!["39012345", "38999001", "10512345"]);
    assert!(parsed.skipped.is_empty());
}

#[test]
fn test_fixture_field_values() {
    let parsed = parse_records(&read_fixture("sufu_efetch.xml")).unwrap();

    let first = &parsed.records[0];
    assert_eq!(
        first.title,
        "Sufu restrains Gli activity during neural tube patterning."
    );
    assert_eq!(first.journal, "Development (Cambridge, England)");
    assert_eq!(first.year, "2024");
    assert_eq!(first.pages, "dev202345");
    assert_eq!(first.author_line(), "Jane Doe, Hiro Tanaka");

    let second = &parsed.records[1];
    assert_eq!(
        second.title,
        "Germline SUFU variants in medulloblastoma & basal cell carcinoma."
    );
    assert_eq!(second.journal, "No journal");
    assert_eq!(second.year, "2023");

    let third = &parsed.records[2];
    assert_eq!(third.year, "Unknown");
    assert_eq!(third.pages, "N/A");
    assert_eq!(third.author_line(), "Kim, Maria Rossi");
}

#[test]
fn test_complete_record_has_no_fallbacks() {
    let parsed = parse_records(&article_set(&[full_article("123")])).unwrap();
    assert_eq!(
        parsed.records,
        vec![Record {
            pmid: "123".to_string(),
            title: "T1".to_string(),
            authors: vec!["Jane Doe".to_string()],
            journal: "J1".to_string(),
            year: "2020".to_string(),
            pages: "1-5".to_string(),
        }]
    );
}

#[rstest]
#[case::pmid(article_xml(None, Some("T1"), Some("J1"), Some("2020"), Some("1-5"), &[]), "N/A", 0)]
#[case::title(article_xml(Some("1"), None, Some("J1"), Some("2020"), Some("1-5"), &[]), "No title", 1)]
#[case::journal(article_xml(Some("1"), Some("T1"), None, Some("2020"), Some("1-5"), &[]), "No journal", 2)]
#[case::year(article_xml(Some("1"), Some("T1"), Some("J1"), None, Some("1-5"), &[]), "Unknown", 3)]
#[case::pages(article_xml(Some("1"), Some("T1"), Some("J1"), Some("2020"), None, &[]), "N/A", 4)]
fn test_missing_field_uses_fallback(
    #[case] xml: String,
    #[case] fallback: &str,
    #[case] position: usize,
) {
    let parsed = parse_records(&article_set(&[xml])).unwrap();
    let record = &parsed.records[0];

    let values = [
        record.pmid.as_str(),
        record.title.as_str(),
        record.journal.as_str(),
        record.year.as_str(),
        record.pages.as_str(),
    ];
    let present = ["1", "T1", "J1", "2020", "1-5"];

    for (i, value) in values.iter().enumerate() {
        if i == position {
            assert_eq!(*value, fallback);
        } else {
            assert_eq!(*value, present[i], "field {} changed", i);
        }
    }
}

#[test]
fn test_second_record_missing_journal() {
    let second = article_xml(
        Some("456"),
        Some("T2"),
        None,
        Some("2021"),
        Some("9-12"),
        &[],
    );
    let parsed = parse_records(&article_set(&[full_article("123"), second])).unwrap();
    let report = render_report(&parsed.records);

    let blocks: Vec<&str> = report.split(&"-".repeat(80)).collect();
    assert_eq!(blocks.len(), 3);
    assert!(blocks[0].starts_with("PMID: 123\n"));
    assert!(blocks[1].contains("PMID: 456\n"));
    assert!(blocks[1].contains("Journal: No journal (2021), pp. 9-12\n"));
}

#[test]
fn test_author_with_empty_given_name() {
    let xml = article_xml(Some("1"), None, None, None, None, &[("", "Doe"), ("", "")]);
    let parsed = parse_records(&article_set(&[xml])).unwrap();
    assert_eq!(parsed.records[0].authors, vec!["Doe"]);
    assert_eq!(parsed.records[0].author_line(), "Doe");
}

#[test]
#[traced_test]
fn test_malformed_author_list_skips_only_that_record() {
    let broken = "<PubmedArticle><MedlineCitation><PMID>2</PMID><Article><AuthorList><Author><LastName>A</LastName><LastName>B</LastName></Author></AuthorList></Article></MedlineCitation></PubmedArticle>".to_string();
    let parsed =
        parse_records(&article_set(&[full_article("1"), broken, full_article("3")])).unwrap();

    let ids: Vec<&str> = parsed.records.iter().map(|r| r.pmid.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
    assert_eq!(parsed.skipped.len(), 1);
    assert!(logs_contain("Skipping one article due to error"));
}
