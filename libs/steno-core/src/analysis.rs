//! Engine entry points: tokenize, align, classify and score.

use crate::alignment::{align, classify};
use crate::error::{AnalysisError, Result, TextSide};
use crate::matching::get_matcher;
use crate::scoring::{score, Tally};
use crate::tokenizer::tokenize;
use crate::types::{AnalysisResult, EffectiveSettings, EquivalenceConfig};

/// Analyze typed text against master text with default tokenization.
pub fn analyze_text(master: &str, typed: &str, equivalence: EquivalenceConfig) -> AnalysisResult {
    let settings = EffectiveSettings::from(equivalence);
    let master_tokens = tokenize(master, settings.tokenize_policy);
    let typed_tokens = tokenize(typed, settings.tokenize_policy);
    analyze_tokens(&master_tokens, &typed_tokens, &settings.equivalence)
}

/// Analyze with full settings, enforcing the token cap if one is set.
pub fn analyze(master: &str, typed: &str, settings: &EffectiveSettings) -> Result<AnalysisResult> {
    let master_tokens = tokenize(master, settings.tokenize_policy);
    let typed_tokens = tokenize(typed, settings.tokenize_policy);

    if let Some(limit) = settings.max_tokens {
        check_limit(TextSide::Master, master_tokens.len(), limit)?;
        check_limit(TextSide::Typed, typed_tokens.len(), limit)?;
    }

    Ok(analyze_tokens(
        &master_tokens,
        &typed_tokens,
        &settings.equivalence,
    ))
}

/// Analyze already tokenized sequences.
pub fn analyze_tokens(
    master: &[String],
    typed: &[String],
    equivalence: &EquivalenceConfig,
) -> AnalysisResult {
    if master.is_empty() && typed.is_empty() {
        return AnalysisResult::default();
    }

    let matcher = get_matcher(equivalence);
    let matches = align(master, typed, matcher.as_ref());
    let classification = classify(master, typed, &matches, matcher.as_ref());

    let tally = Tally {
        total_master_words: master.len(),
        total_typed_words: typed.len(),
        correct_words: matches.len(),
        full_mistakes: classification.full_mistakes,
        half_mistakes: classification.half_mistakes,
    };
    let stats = score(&tally);

    tracing::debug!(
        matcher = matcher.name(),
        master_words = stats.total_master_words,
        typed_words = stats.total_typed_words,
        full = stats.full_mistakes,
        half = stats.half_mistakes,
        marks = stats.marks,
        "analysis complete"
    );

    AnalysisResult {
        results: classification.outcomes,
        stats,
    }
}

fn check_limit(side: TextSide, count: usize, limit: usize) -> Result<()> {
    if count > limit {
        return Err(AnalysisError::TooManyTokens { side, count, limit });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Outcome, OutcomeKind, TokenizePolicy, Weight};
    use pretty_assertions::assert_eq;

    fn exact(master: &str, typed: &str) -> AnalysisResult {
        analyze_text(master, typed, EquivalenceConfig::off())
    }

    fn typed_tokens(result: &AnalysisResult) -> Vec<&str> {
        result.results.iter().filter_map(Outcome::typed).collect()
    }

    fn master_tokens(result: &AnalysisResult) -> Vec<&str> {
        result.results.iter().filter_map(Outcome::correct).collect()
    }

    #[test]
    fn test_identical_texts_are_all_correct() {
        let text = "यह एक परीक्षा है, ध्यान से लिखें।";
        let result = exact(text, text);
        assert!(result.results.iter().all(Outcome::is_correct));
        assert_eq!(result.stats.full_mistakes, 0);
        assert_eq!(result.stats.half_mistakes, 0);
        assert_eq!(result.stats.correct_words, 7);
        assert_eq!(result.stats.marks, 100.0);
        assert_eq!(result.stats.accuracy, 100.0);
    }

    #[test]
    fn test_empty_texts_give_default_stats() {
        let result = exact("", "");
        assert!(result.results.is_empty());
        assert_eq!(result.stats.total_master_words, 0);
        assert_eq!(result.stats.total_typed_words, 0);
        assert_eq!(result.stats.total_penalty, 0.0);
        assert_eq!(result.stats.marks, 100.0);
        assert_eq!(result.stats.accuracy, 100.0);
    }

    #[test]
    fn test_empty_master_counts_extras_but_keeps_full_marks() {
        let result = exact("", "कुछ शब्द");
        assert_eq!(result.stats.full_mistakes, 2);
        assert_eq!(result.stats.marks, 100.0);
        assert!(result
            .results
            .iter()
            .all(|o| o.kind() == OutcomeKind::Extra));
    }

    #[test]
    fn test_dropped_word_scenario() {
        let result = exact("एक दो तीन", "एक तीन");
        let missing: Vec<_> = result
            .results
            .iter()
            .filter(|o| matches!(o, Outcome::Missing { .. }))
            .collect();
        assert_eq!(
            missing,
            vec![&Outcome::Missing {
                correct: "दो".to_string(),
                weight: Weight::Full
            }]
        );
        assert_eq!(result.stats.full_mistakes, 1);
        assert_eq!(result.stats.total_penalty, 1.0);
        assert_eq!(result.stats.marks, 66.67);
        assert_eq!(result.stats.accuracy, 66.67);
    }

    #[test]
    fn test_dropped_comma_is_one_half_mistake() {
        let result = exact("राम, श्याम", "राम श्याम");
        assert_eq!(result.stats.half_mistakes, 1);
        assert_eq!(result.stats.full_mistakes, 0);
        assert_eq!(result.stats.total_penalty, 0.5);
        assert_eq!(result.stats.marks, 75.0);
    }

    #[test]
    fn test_equivalence_toggle_changes_the_verdict() {
        let master = "उसे ज़रूरत है";
        let typed = "उसे जरूरत है";

        let on = analyze_text(master, typed, EquivalenceConfig::on());
        assert!(on.results.iter().all(Outcome::is_correct));
        assert_eq!(on.stats.marks, 100.0);

        let off = analyze_text(master, typed, EquivalenceConfig::off());
        assert_eq!(
            off.results[1],
            Outcome::Substitution {
                typed: "जरूरत".to_string(),
                correct: "ज़रूरत".to_string(),
                weight: Weight::Full
            }
        );
        assert_eq!(off.stats.full_mistakes, 1);
    }

    #[test]
    fn test_equivalence_keeps_display_spelling() {
        let result = analyze_text("हिन्दी", "हिंदी", EquivalenceConfig::on());
        assert_eq!(
            result.results,
            vec![Outcome::Correct {
                typed: "हिंदी".to_string(),
                correct: "हिन्दी".to_string()
            }]
        );
    }

    #[test]
    fn test_tokens_are_conserved() {
        let cases = [
            ("एक दो तीन चार पाँच", "एक तीन तीन चार छह सात"),
            ("a b c d", "x a c e d f"),
            ("राम, श्याम । गया", "श्याम राम - गया गया"),
            ("उसे ज़रूरत है। हिन्दी में", "उसे जरूरत है हिंदी, में।"),
            ("", "कुछ"),
            ("कुछ", ""),
        ];
        let settings = [
            (EquivalenceConfig::off(), TokenizePolicy::WholeWords),
            (EquivalenceConfig::on(), TokenizePolicy::WholeWords),
            (EquivalenceConfig::off(), TokenizePolicy::SplitPunctuation),
            (EquivalenceConfig::on(), TokenizePolicy::SplitPunctuation),
        ];

        for (equivalence, tokenize_policy) in settings {
            let settings = EffectiveSettings {
                equivalence,
                tokenize_policy,
                max_tokens: None,
            };
            for (master, typed) in cases {
                let result = analyze(master, typed, &settings).unwrap();
                let expected_typed = tokenize(typed, tokenize_policy);
                let expected_master = tokenize(master, tokenize_policy);
                assert_eq!(typed_tokens(&result), expected_typed);
                assert_eq!(master_tokens(&result), expected_master);
                assert_eq!(analyze(master, typed, &settings).unwrap(), result);
            }
        }
    }

    #[test]
    fn test_tallies_match_outcomes() {
        let result = exact("राम, श्याम । गया घर", "श्याम राम - गया");
        let non_correct = result.results.iter().filter(|o| !o.is_correct()).count();
        let paired = result
            .results
            .iter()
            .filter(|o| matches!(o, Outcome::Correct { .. } | Outcome::Substitution { .. }))
            .count();
        let penalty: f64 = result.results.iter().map(Outcome::penalty).sum();

        assert_eq!(result.stats.full_mistakes + result.stats.half_mistakes, non_correct);
        assert!(paired <= 4);
        assert_eq!(result.stats.total_penalty, penalty);
        assert_eq!(
            result.stats.total_penalty,
            result.stats.full_mistakes as f64 + result.stats.half_mistakes as f64 * 0.5
        );
    }

    #[test]
    fn test_trailing_extras_never_improve_the_score() {
        let master = "एक दो तीन चार";
        let mut typed = String::from("एक दो तीन");
        let mut last = exact(master, &typed).stats;
        for extra in ["पाँच", "छह", "सात", "आठ"] {
            typed.push(' ');
            typed.push_str(extra);
            let stats = exact(master, &typed).stats;
            assert!(stats.full_mistakes >= last.full_mistakes);
            assert!(stats.marks <= last.marks);
            last = stats;
        }
        assert_eq!(last.marks, 0.0);
    }

    #[test]
    fn test_attached_sentence_stop_under_both_policies() {
        let whole = exact("वह बात।", "वह बात");
        assert_eq!(
            whole.results[1],
            Outcome::Substitution {
                typed: "बात".to_string(),
                correct: "बात।".to_string(),
                weight: Weight::Half
            }
        );
        assert_eq!(whole.stats.total_penalty, 0.5);

        let settings = EffectiveSettings {
            equivalence: EquivalenceConfig::off(),
            tokenize_policy: TokenizePolicy::SplitPunctuation,
            max_tokens: None,
        };
        let split = analyze("वह बात।", "वह बात", &settings).unwrap();
        assert_eq!(split.stats.total_master_words, 3);
        assert_eq!(
            split.results[2],
            Outcome::Missing {
                correct: "।".to_string(),
                weight: Weight::Half
            }
        );
        assert_eq!(split.stats.total_penalty, 0.5);
        assert_eq!(split.stats.marks, 83.33);
    }

    #[test]
    fn test_non_soft_punctuation_is_a_full_mistake() {
        let result = exact("क्या?", "क्या");
        assert_eq!(result.stats.full_mistakes, 1);
    }

    #[test]
    fn test_token_cap_rejects_long_texts() {
        let settings = EffectiveSettings {
            equivalence: EquivalenceConfig::off(),
            tokenize_policy: TokenizePolicy::WholeWords,
            max_tokens: Some(2),
        };
        assert_eq!(
            analyze("एक दो", "एक दो तीन", &settings),
            Err(AnalysisError::TooManyTokens {
                side: TextSide::Typed,
                count: 3,
                limit: 2
            })
        );
        assert!(analyze("एक दो", "एक दो", &settings).is_ok());
    }
}
