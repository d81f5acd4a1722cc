use condo_advocate::application::services::TextChunker;

const SMALL_MAX_LENGTH: usize = 10;
const MIN_CONTENT: usize = 10;

#[test]
fn given_text_when_splitting_then_concatenation_reproduces_input() {
    let chunker = TextChunker::new(SMALL_MAX_LENGTH, MIN_CONTENT);
    let text = "Special assessment for roof repairs, pool renovation and legal fees.";

    let chunks = chunker.split(text);

    assert_eq!(chunks.concat(), text);
    let expected = text.chars().count().div_ceil(SMALL_MAX_LENGTH);
    assert_eq!(chunks.len(), expected);
}

#[test]
fn given_text_when_splitting_then_only_last_chunk_may_be_short() {
    let chunker = TextChunker::new(SMALL_MAX_LENGTH, MIN_CONTENT);
    let text = "a".repeat(35);

    let chunks = chunker.split(&text);
    let (last, full) = chunks.split_last().unwrap();

    assert!(full.iter().all(|c| c.chars().count() == SMALL_MAX_LENGTH));
    assert_eq!(last.chars().count(), 5);
}

#[test]
fn given_exact_multiple_when_splitting_then_has_no_empty_tail() {
    let chunker = TextChunker::new(SMALL_MAX_LENGTH, MIN_CONTENT);
    let text = "b".repeat(SMALL_MAX_LENGTH * 3);

    let chunks = chunker.split(&text);

    assert_eq!(chunks.len(), 3);
    assert!(chunks.iter().all(|c| !c.is_empty()));
}

#[test]
fn given_empty_text_when_splitting_then_returns_no_chunks() {
    let chunker = TextChunker::default();

    assert!(chunker.split("").is_empty());
    assert!(chunker.usable_chunks("").is_empty());
}

#[test]
fn given_multibyte_text_when_splitting_then_counts_characters_not_bytes() {
    let chunker = TextChunker::new(3, 0);
    let text = "ééééé";

    let chunks = chunker.split(text);

    assert_eq!(chunks, vec!["ééé", "éé"]);
}

#[test]
fn given_whitespace_tail_when_selecting_usable_chunks_then_drops_it() {
    let chunker = TextChunker::new(20, MIN_CONTENT);
    let text = format!("{}{}", "Condo fee: 1200.00 $", "   \n  ok  ");

    let usable = chunker.usable_chunks(&text);

    assert_eq!(usable, vec!["Condo fee: 1200.00 $"]);
}

#[test]
fn given_chunk_with_exactly_min_content_when_filtering_then_drops_it() {
    let chunker = TextChunker::new(100, MIN_CONTENT);

    assert!(chunker.usable_chunks("  0123456789  ").is_empty());
    assert_eq!(chunker.usable_chunks("0123456789X").len(), 1);
}

#[test]
fn given_zero_max_length_when_constructing_then_clamps_to_one() {
    let chunker = TextChunker::new(0, 0);

    assert_eq!(chunker.max_length(), 1);
    assert_eq!(chunker.split("abc"), vec!["a", "b", "c"]);
}

mod properties {
    use condo_advocate::application::services::TextChunker;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn given_any_text_when_splitting_then_chunks_concatenate_to_input(
            text in "\\PC{0,300}",
            max_length in 1usize..64,
        ) {
            let chunks = TextChunker::new(max_length, 10).split(&text);

            prop_assert_eq!(chunks.concat(), text.clone());
            prop_assert_eq!(chunks.len(), text.chars().count().div_ceil(max_length));
        }

        #[test]
        fn given_any_text_when_splitting_then_only_last_chunk_is_short(
            text in "\\PC{1,300}",
            max_length in 1usize..64,
        ) {
            let chunks = TextChunker::new(max_length, 10).split(&text);
            let (last, full) = chunks.split_last().unwrap();

            prop_assert!(full.iter().all(|c| c.chars().count() == max_length));
            prop_assert!((1..=max_length).contains(&last.chars().count()));
        }
    }
}
