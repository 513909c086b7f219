use tf_similarity::{
    calculate_similarity, read_text, vectorizer::tokenizer::tokenize, write_text, Language,
    SimilarityError,
};

const EPS: f64 = 1e-9;

const ORIGINAL: &str = "今天是星期天，天气晴，今天晚上我要去看电影。";
const PLAGIARIZED: &str = "今天是周天，天气晴朗，我晚上要去看电影。";
const ENGLISH_A: &str = "Cosine similarity measures the angle between two term vectors.";
const ENGLISH_B: &str = "The angle between two vectors is what cosine similarity measures!";

#[test]
fn deterministic() {
    let first = calculate_similarity(ORIGINAL, PLAGIARIZED).unwrap();
    for _ in 0..5 {
        assert_eq!(calculate_similarity(ORIGINAL, PLAGIARIZED).unwrap(), first);
    }
}

#[test]
fn symmetric() {
    let ab = calculate_similarity(ORIGINAL, PLAGIARIZED).unwrap();
    let ba = calculate_similarity(PLAGIARIZED, ORIGINAL).unwrap();
    assert!((ab - ba).abs() < EPS);

    let ab = calculate_similarity(ENGLISH_A, ENGLISH_B).unwrap();
    let ba = calculate_similarity(ENGLISH_B, ENGLISH_A).unwrap();
    assert!((ab - ba).abs() < EPS);
}

#[test]
fn self_similarity_is_one() {
    for doc in [ORIGINAL, PLAGIARIZED, ENGLISH_A, ENGLISH_B] {
        let score = calculate_similarity(doc, doc).unwrap();
        assert!((score - 1.0).abs() < EPS, "{doc}: {score}");
    }
}

#[test]
fn scores_stay_in_range() {
    let docs = [ORIGINAL, PLAGIARIZED, ENGLISH_A, ENGLISH_B];
    for a in docs {
        for b in docs {
            let score = calculate_similarity(a, b).unwrap();
            assert!((0.0..=1.0 + EPS).contains(&score), "{a} / {b}: {score}");
        }
    }
}

#[test]
fn rewritten_text_is_similar_but_not_identical() {
    let score = calculate_similarity(ORIGINAL, PLAGIARIZED).unwrap();
    assert!(score > 0.3 && score < 1.0, "{score}");
}

#[test]
fn disjoint_documents_are_orthogonal() {
    assert_eq!(calculate_similarity("red green blue", "one two three").unwrap(), 0.0);
}

#[test]
fn empty_tokens_count_as_terms() {
    // double spaces on both sides share the empty term
    let score = calculate_similarity("alpha  beta", "gamma  delta").unwrap();
    assert!(score > 0.0);
    assert_eq!(tokenize("alpha  beta", Language::Other), vec!["alpha", "", "beta"]);
}

#[test]
fn both_empty_is_an_error() {
    // spaces alone still split into empty terms
    assert_eq!(calculate_similarity("", "  ").unwrap(), 0.0);
    assert!(matches!(calculate_similarity("", ""), Err(SimilarityError::DegenerateVector)));
}

#[test]
fn files_round_trip_through_io_helpers() {
    let dir = tempfile::tempdir().unwrap();
    let orig_path = dir.path().join("orig.txt");
    let copy_path = dir.path().join("copy.txt");
    write_text(&orig_path, ORIGINAL).unwrap();
    write_text(&copy_path, PLAGIARIZED).unwrap();

    let a = read_text(&orig_path).unwrap();
    let b = read_text(&copy_path).unwrap();
    assert_eq!(
        calculate_similarity(&a, &b).unwrap(),
        calculate_similarity(ORIGINAL, PLAGIARIZED).unwrap()
    );
}
