//! Sample delimiting and aggregation semantics

use corpus_stats::errors::AppError;
use corpus_stats::processor::CorpusProcessor;
use corpus_stats::types::{AnalyseConfig, DecodePolicy};

use crate::common::{write_corpus, write_corpus_bytes};

#[test]
fn test_samples_are_delimited_by_sentinel() {
    let corpus = write_corpus(&["a b c", "<eos>", "d", "<eos>"]);
    let stats = CorpusProcessor::new(AnalyseConfig::new(corpus.path()))
        .process()
        .unwrap();

    assert_eq!(stats.token_counts, vec![3, 1]);
    assert_eq!(stats.sample_count, 2);
    assert_eq!(stats.token_counts.iter().sum::<u64>(), 4);
}

#[test]
fn test_tokens_accumulate_across_lines_within_a_sample() {
    let corpus = write_corpus(&["a b", "c d e", "<eos>"]);
    let stats = CorpusProcessor::new(AnalyseConfig::new(corpus.path()))
        .process()
        .unwrap();

    assert_eq!(stats.token_counts, vec![5]);
}

#[test]
fn test_empty_sample_is_discarded_at_sentinel() {
    let corpus = write_corpus(&["", "<eos>", "a", "<eos>", "<eos>"]);
    let stats = CorpusProcessor::new(AnalyseConfig::new(corpus.path()))
        .process()
        .unwrap();

    assert_eq!(stats.token_counts, vec![1]);
    assert_eq!(stats.sample_count, 1);
}

#[test]
fn test_file_without_sentinel_yields_no_samples() {
    let corpus = write_corpus(&["a b c", "d e"]);
    let stats = CorpusProcessor::new(AnalyseConfig::new(corpus.path()))
        .process()
        .unwrap();

    assert!(stats.token_counts.is_empty());
    assert_eq!(stats.sample_count, 0);
    // Character statistics are still gathered
    assert!(stats.total_chars > 0);
}

#[test]
fn test_unterminated_trailing_sample_is_dropped() {
    let corpus = write_corpus(&["a b", "<eos>", "c d e"]);
    let stats = CorpusProcessor::new(AnalyseConfig::new(corpus.path()))
        .process()
        .unwrap();

    assert_eq!(stats.token_counts, vec![2]);
    assert_eq!(stats.sample_count, 1);
}

#[test]
fn test_eof_closes_sample_keeps_trailing_sample() {
    let corpus = write_corpus(&["a b", "<eos>", "c d e"]);
    let config = AnalyseConfig::new(corpus.path()).eof_closes_sample(true);
    let stats = CorpusProcessor::new(config).process().unwrap();

    assert_eq!(stats.token_counts, vec![2, 3]);
    assert_eq!(stats.sample_count, 2);
}

#[test]
fn test_sentinel_is_recognised_with_surrounding_whitespace() {
    let corpus = write_corpus(&["a", "  <eos>  ", "b", "<eos>"]);
    let stats = CorpusProcessor::new(AnalyseConfig::new(corpus.path()))
        .process()
        .unwrap();

    assert_eq!(stats.token_counts, vec![1, 1]);
}

#[test]
fn test_sentinel_lines_are_excluded_from_character_stats() {
    let corpus = write_corpus(&["ab", "<eos>"]);
    let stats = CorpusProcessor::new(AnalyseConfig::new(corpus.path()))
        .process()
        .unwrap();

    // "ab\n" only: the sentinel line contributes nothing
    assert_eq!(stats.total_chars, 3);
    assert_eq!(stats.char_frequencies.get(&'a'), Some(&1));
    assert_eq!(stats.char_frequencies.get(&'b'), Some(&1));
    assert_eq!(stats.char_frequencies.get(&'\n'), Some(&1));
    assert_eq!(stats.char_frequencies.get(&'<'), None);
}

#[test]
fn test_char_frequencies_sum_to_total_chars() {
    let corpus = write_corpus(&["a b c", "héllo wörld", "<eos>", "x y", "<eos>"]);
    let stats = CorpusProcessor::new(AnalyseConfig::new(corpus.path()))
        .process()
        .unwrap();

    let table_total: u64 = stats.char_frequencies.values().sum();
    assert_eq!(table_total, stats.total_chars);
}

#[test]
fn test_non_ascii_characters_are_counted() {
    let corpus = write_corpus(&["héllo", "<eos>"]);
    let stats = CorpusProcessor::new(AnalyseConfig::new(corpus.path()))
        .process()
        .unwrap();

    assert_eq!(stats.non_ascii_chars(), 1);
    // "héllo\n" is six characters
    assert_eq!(stats.total_chars, 6);
}

#[test]
fn test_replace_policy_substitutes_invalid_bytes() {
    let corpus = write_corpus_bytes(b"caf\xE9 au lait\n<eos>\n");
    let stats = CorpusProcessor::new(AnalyseConfig::new(corpus.path()))
        .process()
        .unwrap();

    assert_eq!(stats.token_counts, vec![3]);
    // The replacement character has a code point above 127
    assert_eq!(stats.char_frequencies.get(&'\u{FFFD}'), Some(&1));
    assert_eq!(stats.non_ascii_chars(), 1);
}

#[test]
fn test_strict_policy_aborts_on_invalid_bytes() {
    let corpus = write_corpus_bytes(b"ok line\ncaf\xE9\n<eos>\n");
    let config = AnalyseConfig::new(corpus.path()).decode_policy(DecodePolicy::Strict);
    let result = CorpusProcessor::new(config).process();

    assert!(matches!(
        result,
        Err(AppError::InvalidEncoding { line: 2, .. })
    ));
}

#[test]
fn test_missing_file_reports_file_unavailable() {
    let config = AnalyseConfig::new("/nonexistent/path/corpus.txt");
    let result = CorpusProcessor::new(config).process();

    assert!(matches!(result, Err(AppError::FileUnavailable { .. })));
}
