// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::sentiment::PolarityScores;
use crate::domain::services::sentiment_scorer::{ScoringError, SentimentAnalyzer};

use super::lexicon;

/// 否定词缩放系数
const NEGATION_SCALAR: f64 = -0.74;
/// 全大写强调增量
const CAPS_INCREMENT: f64 = 0.733;
/// 每个感叹号的增强量（最多计 4 个）
const EXCLAMATION_INCREMENT: f64 = 0.292;
/// 每个问号的增强量（2~3 个时）
const QUESTION_INCREMENT: f64 = 0.18;
/// 问号数量超过 3 个时的固定增强量
const QUESTION_MAX: f64 = 0.96;
/// 复合分数归一化常数
const NORMALIZATION_ALPHA: f64 = 15.0;

/// 基于词典的规则情感分析器
///
/// 词典查值后依次应用程度副词、否定词、全大写强调、`but` 转折与标点强调，
/// 最后将总分归一化到 (-1, 1)。相同文本总是得到相同分数。
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// 计算极性分数
    pub fn analyze(&self, text: &str) -> PolarityScores {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return PolarityScores::default();
        }

        let caps_differ = {
            let shouting = tokens.iter().filter(|t| is_all_caps(t)).count();
            shouting > 0 && shouting < tokens.len()
        };
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

        let mut sentiments: Vec<f64> = (0..tokens.len())
            .map(|i| token_valence(&tokens, &lowered, i, caps_differ))
            .collect();
        apply_but_rule(&lowered, &mut sentiments);

        let amplifier = punctuation_emphasis(text);
        let compound = compound_score(&sentiments, amplifier);
        let (pos, neg, neu) = polarity_shares(&sentiments, amplifier);

        PolarityScores {
            neg,
            neu,
            pos,
            compound,
        }
    }
}

impl SentimentAnalyzer for LexiconAnalyzer {
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores, ScoringError> {
        Ok(self.analyze(text))
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}

fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
        .map(|token| token.trim_matches('\''))
        .filter(|token| token.chars().count() > 1)
        .collect()
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(char::is_alphabetic)
        && token
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

fn token_valence(tokens: &[&str], lowered: &[String], i: usize, caps_differ: bool) -> f64 {
    let word = lowered[i].as_str();
    if lexicon::booster(word).is_some() {
        return 0.0;
    }
    let Some(mut valence) = lexicon::valence(word) else {
        return 0.0;
    };

    if caps_differ && is_all_caps(tokens[i]) {
        valence += CAPS_INCREMENT * valence.signum();
    }

    for distance in 1..=3usize {
        if distance > i {
            break;
        }
        let previous = lowered[i - distance].as_str();

        if lexicon::valence(previous).is_none() {
            if let Some(mut scalar) = lexicon::booster(previous) {
                if valence < 0.0 {
                    scalar = -scalar;
                }
                if caps_differ && is_all_caps(tokens[i - distance]) {
                    scalar += CAPS_INCREMENT * scalar.signum();
                }
                scalar *= match distance {
                    1 => 1.0,
                    2 => 0.95,
                    _ => 0.9,
                };
                valence += scalar;
            }
        }

        if lexicon::is_negation(previous) {
            valence *= NEGATION_SCALAR;
        }
    }

    valence
}

/// `but` 之前的情感减半，之后的增强 1.5 倍
fn apply_but_rule(lowered: &[String], sentiments: &mut [f64]) {
    let Some(pivot) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (i, sentiment) in sentiments.iter_mut().enumerate() {
        if i < pivot {
            *sentiment *= 0.5;
        } else if i > pivot {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64;
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => QUESTION_MAX,
    };
    exclamations * EXCLAMATION_INCREMENT + question_emphasis
}

fn compound_score(sentiments: &[f64], amplifier: f64) -> f64 {
    let mut total: f64 = sentiments.iter().sum();
    if total > 0.0 {
        total += amplifier;
    } else if total < 0.0 {
        total -= amplifier;
    }
    let normalized = (total / (total * total + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0);
    round_to(normalized, 4)
}

fn polarity_shares(sentiments: &[f64], amplifier: f64) -> (f64, f64, f64) {
    let mut positive = 0.0;
    let mut negative = 0.0;
    let mut neutral = 0.0;
    for &sentiment in sentiments {
        if sentiment > 0.0 {
            positive += sentiment + 1.0;
        } else if sentiment < 0.0 {
            negative += sentiment - 1.0;
        } else {
            neutral += 1.0;
        }
    }

    if positive > negative.abs() {
        positive += amplifier;
    } else if positive < negative.abs() {
        negative -= amplifier;
    }

    let total = positive + negative.abs() + neutral;
    if total == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    (
        round_to((positive / total).abs(), 3),
        round_to((negative / total).abs(), 3),
        round_to((neutral / total).abs(), 3),
    )
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
#[path = "lexicon_analyzer_test.rs"]
mod tests;
