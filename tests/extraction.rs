// file: tests/extraction.rs
// description: end-to-end properties of extraction, aggregation, and export
// reference: integration tests against the public api

use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;
use tipscan::{
    AggregateStore, Category, Config, Document, PipelineOrchestrator, ReportProcessor,
    TextExporter, format_category, normalize, segment,
};

const HASH: &str = "001122335550102030aabbccddeeff00";

fn processor() -> ReportProcessor {
    ReportProcessor::new(&Config::default_config().extraction)
}

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_extract_is_idempotent() {
    let text = "Section A:\nScreen/User Name: agent007\nIP Address: 10.0.0.1 06-15-2023 14:30:00 UTC\n";
    let p = processor();

    let first = p.extract(text);
    let second = p.extract(text);
    assert_eq!(first, second);

    let mut store = AggregateStore::new();
    assert_eq!(store.apply(first.iter()), 2);
    let before = store.clone();
    assert_eq!(store.apply(second.iter()), 0);
    assert_eq!(store, before);
}

#[test]
fn test_store_is_union_of_documents() {
    let doc_a = "Section A:\nDisplay Name: alpha\nEmail: shared@example.com\n";
    let doc_b = "Section C:\nDisplay Name: beta\nEmail: shared@example.com\n";
    let p = processor();

    let mut both = AggregateStore::new();
    both.apply(p.extract(doc_a).iter());
    both.apply(p.extract(doc_b).iter());

    for category in Category::ALL {
        let expected: BTreeSet<String> = p
            .extract(doc_a)
            .values(category)
            .union(&p.extract(doc_b).values(category))
            .cloned()
            .collect();
        assert_eq!(both.snapshot(category), expected, "{category}");
    }
    assert_eq!(both.snapshot(Category::Usernames), set(&["alpha", "beta"]));
    assert_eq!(both.count(Category::Emails), 1);
}

#[test]
fn test_phone_inside_hash_is_suppressed() {
    // digits 5550102030 occur inside the hash
    let text = format!("Section B:\nMD5: {HASH}\nCall 555-010-2030\n");
    let extraction = processor().extract(&text);

    assert_eq!(extraction.values(Category::Hashes).len(), 1);
    assert!(extraction.values(Category::Phones).is_empty());
}

#[test]
fn test_hash_guard_stays_within_its_section() {
    let text = format!("Section A:\nMD5: {HASH}\nSection B:\nCall 555-010-2030\n");
    let extraction = processor().extract(&text);

    assert_eq!(extraction.values(Category::Hashes), set(&[HASH]));
    assert_eq!(extraction.values(Category::Phones), set(&["555-010-2030"]));
}

#[test]
fn test_switchboard_number_is_suppressed_in_every_format() {
    let text = "Section A:\n(217) 782-9030\n217.782.9030\n+1 217-782-9030\n2177829030\n(555) 010-4455\n";
    let extraction = processor().extract(text);

    assert_eq!(extraction.values(Category::Phones), set(&["(555) 010-4455"]));
}

#[test]
fn test_timestamp_canonicalization() {
    assert_eq!(
        normalize("06-15-2023 14:30:00 UTC").unwrap().canonical(),
        "2023-06-15 14:30:00"
    );

    // the tabular date never parses, so the sighting is dropped
    let text = "Section B:\nIP Address 10.1.2.3 Upload 06-2023 14:30:00 UTC\n";
    assert!(processor().extract(text).values(Category::Ips).is_empty());
}

#[test]
fn test_section_boundaries() {
    let sections = segment("Section A: foo Section B: bar");

    assert_eq!(sections.get("Section A:").unwrap().text, "foo");
    assert_eq!(sections.get("Section B:").unwrap().text, "bar");
}

#[test]
fn test_ip_export_is_chronological() {
    let values = set(&[
        "10.0.0.1 → 2023-01-02 10:00:00",
        "10.0.0.2 → 2022-12-31 09:00:00",
    ]);

    assert_eq!(
        format_category(Category::Ips, &values),
        vec![
            "10.0.0.2 → 2022-12-31 09:00:00".to_string(),
            "10.0.0.1 → 2023-01-02 10:00:00".to_string(),
        ]
    );
}

#[test]
fn test_end_to_end_cases() {
    let p = processor();

    let found = p.extract("Section A: Screen/User Name: agent007");
    assert_eq!(found.values(Category::Usernames), set(&["agent007"]));

    let issuer = p.extract("Section A: contact someone@ncmec.org for details");
    assert!(issuer.values(Category::Emails).is_empty());

    let empty = p.extract("Section A:\nSection B:\nSection C:\nSection D:\n");
    assert!(empty.is_empty());
}

#[test]
fn test_section_d_is_ignored_but_platform_is_not() {
    let text = "Section D:\nSubmitter:\nLaw Enforcement Liaison\nExample Video\nDisplay Name: officer\n";
    let extraction = processor().extract(text);

    assert!(extraction.values(Category::Usernames).is_empty());
    assert_eq!(extraction.values(Category::Platforms), set(&["Example Video"]));
}

#[tokio::test]
async fn test_batch_to_text_export() {
    let input = TempDir::new().unwrap();
    fs::write(
        input.path().join("tip-1.txt"),
        "Section A: Reported Information\n\
         IP Address: 198.51.100.9\n\
         Date/Time: 01-02-2023 10:00:00 UTC\n\
         Section B:\n\
         Email Address: one@example.com\n",
    )
    .unwrap();
    fs::write(
        input.path().join("tip-2.txt"),
        "Section A:\nIP Address: 198.51.100.8 12-31-2022 09:00:00 UTC\nEmail Address: one@example.com\n",
    )
    .unwrap();
    fs::write(input.path().join("scan.pdf"), b"%PDF-1.7").unwrap();

    let mut pipeline = PipelineOrchestrator::new(Config::default_config());
    let report = pipeline.run(&[input.path().to_path_buf()]).await.unwrap();

    assert_eq!(report.loaded.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].path.ends_with("scan.pdf"));

    let output = TempDir::new().unwrap();
    let exported = TextExporter::new(output.path())
        .unwrap()
        .export_all(pipeline.store())
        .unwrap();
    assert_eq!(exported.len(), 6);

    let ips = fs::read_to_string(output.path().join("ips.txt")).unwrap();
    assert_eq!(
        ips,
        "198.51.100.8 → 2022-12-31 09:00:00\n198.51.100.9 → 2023-01-02 10:00:00\n"
    );
    let emails = fs::read_to_string(output.path().join("emails.txt")).unwrap();
    assert_eq!(emails, "one@example.com\n");
    assert_eq!(fs::read_to_string(output.path().join("hashes.txt")).unwrap(), "");
}

#[test]
fn test_csv_document_without_headings() {
    let doc = Document::table(
        "uploads.csv",
        vec![
            "ESP User ID: 99812".to_string(),
            "203.0.113.50 Login 07-04-2023 08:15:00".to_string(),
        ],
    );
    let extraction = processor().process(&doc);

    assert_eq!(extraction.values(Category::Usernames), set(&["99812"]));
    assert_eq!(
        extraction.values(Category::Ips),
        set(&["203.0.113.50 → 2023-07-04 08:15:00"])
    );
}
