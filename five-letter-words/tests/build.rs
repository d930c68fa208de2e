#![allow(missing_docs)]

use std::{
    fs,
    io::{Cursor, Write},
    path::Path,
};

use five_letter_words::{BuildError, BuildSummary, WordsBuild};
use tempfile::TempDir;
use walkdir::WalkDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};
use zip::{ZipWriter, write::SimpleFileOptions};

const FLAT_LIST: &str = "apple\nAPPLE\na1pl2\ngrape\n";

fn scowl_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);
    for (name, contents) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

async fn serve(flat: ResponseTemplate, archive: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/enable1_words.txt"))
        .respond_with(flat)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/scowl.zip"))
        .respond_with(archive)
        .mount(&server)
        .await;
    server
}

fn build_for(server: &MockServer, dir: &Path) -> WordsBuild {
    WordsBuild::default()
        .with_workdir(dir.join("._words_build"))
        .with_output(dir.join("words.json"))
        .with_flat_list_url(format!("{}/enable1_words.txt", server.uri()))
        .with_archive_url(format!("{}/scowl.zip", server.uri()))
}

async fn run(build: WordsBuild) -> Result<BuildSummary, BuildError> {
    tokio::task::spawn_blocking(move || build.run())
        .await
        .expect("build thread panicked")
}

fn output_words(dir: &TempDir) -> Vec<String> {
    let json = fs::read_to_string(dir.path().join("words.json")).unwrap();
    assert!(json.ends_with("]\n"));
    serde_json::from_str(&json).unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn merges_flat_list_and_archive() {
    let archive = scowl_zip(&[
        ("SCOWL-2020.12.07/wordlist/american-english/60", "mango\n"),
        ("SCOWL-2020.12.07/README", "apple grape mango\n"),
    ]);
    let server = serve(
        ResponseTemplate::new(200).set_body_string(FLAT_LIST),
        ResponseTemplate::new(200).set_body_bytes(archive),
    )
    .await;
    let dir = tempfile::tempdir().unwrap();

    let summary = run(build_for(&server, dir.path())).await.unwrap();

    assert_eq!(output_words(&dir), ["apple", "grape", "mango"]);
    assert_eq!(
        fs::read_to_string(dir.path().join("words.json")).unwrap(),
        "[\n  \"apple\",\n  \"grape\",\n  \"mango\"\n]\n",
    );
    assert_eq!(summary.flat_list_words, 2);
    assert_eq!(summary.archive_words, 1);
    assert_eq!(summary.candidates_found, 1);
    assert_eq!(summary.total_words, 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn overlapping_sources_are_deduplicated() {
    let archive = scowl_zip(&[
        ("SCOWL-2020.12.07/wordlist/american-english/60", "grape\nLemon\n"),
        ("SCOWL-2020.12.07/wordlist/american-english/70", "lemon\nzebra\n"),
        ("SCOWL-2020.12.07/wordlist/british-english/70", "apple\nmelon\n"),
        // Not a selected size
        ("SCOWL-2020.12.07/wordlist/british-english/95", "qajaq\n"),
    ]);
    let server = serve(
        ResponseTemplate::new(200).set_body_string(FLAT_LIST),
        ResponseTemplate::new(200).set_body_bytes(archive),
    )
    .await;
    let dir = tempfile::tempdir().unwrap();

    let summary = run(build_for(&server, dir.path())).await.unwrap();

    let words = output_words(&dir);
    assert_eq!(words, ["apple", "grape", "lemon", "melon", "zebra"]);
    assert!(words.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(summary.candidates_found, 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn archive_without_candidates_uses_flat_list_only() {
    let archive = scowl_zip(&[("something-else/words", "mango\n")]);
    let server = serve(
        ResponseTemplate::new(200).set_body_string(FLAT_LIST),
        ResponseTemplate::new(200).set_body_bytes(archive),
    )
    .await;
    let dir = tempfile::tempdir().unwrap();

    let summary = run(build_for(&server, dir.path())).await.unwrap();

    assert_eq!(output_words(&dir), ["apple", "grape"]);
    assert_eq!(summary.candidates_found, 0);
    assert_eq!(summary.to_string(), format!(
        "Built {} with 2 words.",
        dir.path().join("words.json").display(),
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn downloads_and_extracted_tree_are_kept() {
    let archive = scowl_zip(&[
        ("SCOWL-2020.12.07/wordlist/british-english/60", "mango\n"),
        ("SCOWL-2020.12.07/wordlist/british-english/70", "melon\n"),
    ]);
    let server = serve(
        ResponseTemplate::new(200).set_body_string(FLAT_LIST),
        ResponseTemplate::new(200).set_body_bytes(archive),
    )
    .await;
    let dir = tempfile::tempdir().unwrap();
    let build = build_for(&server, dir.path());

    run(build.clone()).await.unwrap();
    let first = output_words(&dir);
    run(build).await.unwrap();
    assert_eq!(output_words(&dir), first);

    let workdir = dir.path().join("._words_build");
    assert_eq!(
        fs::read_to_string(workdir.join("enable1_words.txt")).unwrap(),
        FLAT_LIST,
    );
    assert!(workdir.join("scowl.zip").is_file());
    let extracted = WalkDir::new(workdir.join("scowl"))
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .count();
    assert_eq!(extracted, 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn http_error_aborts() {
    let server = serve(
        ResponseTemplate::new(404),
        ResponseTemplate::new(200).set_body_bytes(scowl_zip(&[])),
    )
    .await;
    let dir = tempfile::tempdir().unwrap();

    let err = run(build_for(&server, dir.path())).await.unwrap_err();

    assert!(
        matches!(err, BuildError::HttpStatus { status: 404, .. }),
        "{err:?}"
    );
    assert!(!dir.path().join("words.json").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn corrupt_archive_aborts() {
    let server = serve(
        ResponseTemplate::new(200).set_body_string(FLAT_LIST),
        ResponseTemplate::new(200).set_body_string("definitely not a zip"),
    )
    .await;
    let dir = tempfile::tempdir().unwrap();

    let err = run(build_for(&server, dir.path())).await.unwrap_err();

    assert!(matches!(err, BuildError::Archive(..)), "{err:?}");
    assert!(!dir.path().join("words.json").exists());
    // The flat list had already been fetched
    assert!(dir.path().join("._words_build/enable1_words.txt").is_file());
}
