//! Cross-module properties of the feedback rule, filter, cache and solver

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_entropy::cache::FeedbackCache;
use wordle_entropy::core::{Pattern, PatternCode, Status, generate, pattern_space, statuses};
use wordle_entropy::solver::{EntropySolver, SolverState};
use wordle_entropy::wordlists::Vocabulary;
use wordle_entropy::wordlists::filter::is_consistent;

/// Every word of `len` letters over `alphabet`
fn all_words(alphabet: &[u8], len: usize) -> Vec<String> {
    let mut words = vec![String::new()];
    for _ in 0..len {
        words = words
            .iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |&letter| {
                    let mut word = prefix.clone();
                    word.push(char::from(letter));
                    word
                })
            })
            .collect();
    }
    words
}

#[test]
fn codec_round_trips_for_short_words() {
    for len in 0..=6 {
        for value in 0..pattern_space(len) {
            let code = PatternCode::new(value as u16);
            let decoded = code.decode(len).unwrap();
            assert_eq!(decoded.len(), len);
            assert_eq!(PatternCode::encode(decoded), code);
        }
        assert!(PatternCode::new(pattern_space(len) as u16).decode(len).is_err());
    }
}

#[test]
fn filter_matches_rule_exhaustively() {
    let words = all_words(b"abc", 4);

    for guess in &words {
        for answer in &words {
            let observed = generate(guess, answer).unwrap();
            assert!(is_consistent(answer, &observed), "{guess}/{answer}");

            for candidate in &words {
                let same = generate(guess, candidate).unwrap() == observed;
                assert_eq!(
                    is_consistent(candidate, &observed),
                    same,
                    "guess {guess}, answer {answer}, candidate {candidate}"
                );
            }
        }
    }
}

#[test]
fn cache_matches_rule_everywhere() {
    let words = all_words(b"abc", 4);
    let vocab = Vocabulary::new(&words).unwrap();
    let cache = FeedbackCache::build(&vocab);

    assert_eq!(cache.size(), 81);
    for (g, guess) in vocab.full_words().iter().enumerate() {
        for (a, answer) in vocab.full_words().iter().enumerate() {
            let cell = cache.get(g, a);
            assert_eq!(cell.decode(4).unwrap(), statuses(guess, answer).unwrap());
            if g == a {
                assert_eq!(cell, PatternCode::solved(4));
            }
        }
    }
}

#[test]
fn persisted_cache_survives_reload() {
    let words = all_words(b"xyz", 3);
    let vocab = Vocabulary::new(&words).unwrap();
    let cache = FeedbackCache::build(&vocab);

    let reloaded = FeedbackCache::from_bytes(&cache.to_bytes().unwrap(), &vocab).unwrap();
    assert_eq!(reloaded, cache);
    assert!(reloaded.self_test(&vocab, 3, &mut StdRng::seed_from_u64(0)));
}

#[test]
fn duplicate_letter_feedback() {
    assert_eq!(generate("aabbb", "aaabb").unwrap().to_string(), "AA~BB");
    assert_eq!(generate("bbaaa", "aaabb").unwrap().to_string(), "bbAaa");
}

#[test]
fn filtering_leaves_single_word() {
    let mut vocab =
        Vocabulary::new(["zzzz", "aabb", "abab", "bbaa", "baba", "abba", "baab"]).unwrap();
    let pattern = Pattern::from_statuses("aabb", &[Status::Absent; 4]).unwrap();

    let removed = vocab.narrow("aabb", &pattern).unwrap();

    assert_eq!(removed, 6);
    assert!(!vocab.contains("aabb"));
    assert_eq!(vocab.len(), 1);
    assert_eq!(vocab.word_at(0), Some("zzzz"));
    assert_eq!(vocab.index_of("zzzz").unwrap(), 0);
}

#[test]
fn single_candidate_is_always_chosen() {
    let vocab = Vocabulary::new(["zzzz", "aabb", "abab", "bbaa"]).unwrap();
    let cache = FeedbackCache::build(&vocab);
    let mut solver = EntropySolver::new(vocab, &cache).unwrap();
    solver
        .apply_feedback("aabb", &generate("aabb", "zzzz").unwrap())
        .unwrap();

    assert_eq!(solver.state(), SolverState::Solved);
    assert!((solver.confidence() - 1.0).abs() < f64::EPSILON);
    for seed in 0..5 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(solver.best_guess_with(&mut rng).unwrap(), "zzzz");
    }
}

#[test]
fn informative_guess_beats_uninformative() {
    let vocab = Vocabulary::new(["ab", "cd", "ce"]).unwrap();
    let cache = FeedbackCache::build(&vocab);
    let mut solver = EntropySolver::new(vocab, &cache).unwrap();
    solver
        .apply_feedback("ab", &Pattern::parse("ab", "00").unwrap())
        .unwrap();

    assert_eq!(solver.remaining_count(), 2);
    assert!(solver.entropy_of("ce").unwrap() > solver.entropy_of("ab").unwrap());
}

#[test]
fn narrowing_never_loses_the_answer() {
    let words = all_words(b"abcd", 3);
    let vocab = Vocabulary::new(&words).unwrap();
    let cache = FeedbackCache::build(&vocab);
    let mut rng = StdRng::seed_from_u64(21);

    for answer in words.iter().step_by(7) {
        let mut solver = EntropySolver::new(vocab.clone(), &cache).unwrap();
        let mut previous = solver.remaining_count();

        loop {
            let guess = solver.best_guess_with(&mut rng).unwrap().to_string();
            let pattern = generate(&guess, answer).unwrap();
            solver.apply_feedback(&guess, &pattern).unwrap();

            assert!(solver.vocabulary().contains(answer));
            assert!(solver.remaining_count() <= previous);
            previous = solver.remaining_count();

            if pattern.is_solved() {
                break;
            }
        }
    }
}
