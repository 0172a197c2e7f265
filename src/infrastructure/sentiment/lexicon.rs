// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 情感词典
//!
//! 词条取值范围约为 [-4, 4]，正值为正向情感。
//! 同时提供否定词与程度副词表，供规则评分使用。

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// 程度副词增强量
pub const BOOSTER_INCREMENT: f64 = 0.293;
/// 程度副词减弱量
pub const BOOSTER_DECREMENT: f64 = -0.293;

const VALENCES: &[(&str, f64)] = &[
    // positive
    ("agree", 1.5),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("benefit", 2.0),
    ("best", 3.2),
    ("better", 1.9),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("care", 2.2),
    ("clean", 1.7),
    ("cool", 1.3),
    ("delight", 2.9),
    ("easy", 1.9),
    ("enjoy", 2.2),
    ("excellent", 3.2),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fantastic", 2.6),
    ("fine", 0.8),
    ("free", 2.3),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("gain", 2.4),
    ("glad", 2.0),
    ("good", 1.9),
    ("grateful", 2.0),
    ("great", 3.1),
    ("happy", 2.7),
    ("healthy", 1.7),
    ("helpful", 1.8),
    ("hope", 1.9),
    ("hopeful", 2.3),
    ("impressive", 2.3),
    ("improve", 1.9),
    ("improved", 2.1),
    ("interesting", 1.7),
    ("joy", 2.8),
    ("kind", 2.4),
    ("like", 1.5),
    ("love", 3.2),
    ("loved", 2.9),
    ("lucky", 1.8),
    ("nice", 1.8),
    ("ok", 1.2),
    ("okay", 0.9),
    ("peace", 2.5),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("positive", 2.6),
    ("praise", 2.6),
    ("proud", 2.1),
    ("recommend", 1.5),
    ("safe", 1.9),
    ("smart", 1.7),
    ("strong", 2.3),
    ("success", 2.7),
    ("successful", 2.8),
    ("support", 1.7),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("trust", 2.3),
    ("welcome", 2.0),
    ("win", 2.8),
    ("winner", 2.8),
    ("won", 2.7),
    ("wonderful", 2.7),
    ("yes", 1.7),
    // negative
    ("afraid", -2.2),
    ("angry", -2.3),
    ("annoying", -1.7),
    ("attack", -2.1),
    ("awful", -2.0),
    ("bad", -2.5),
    ("blame", -1.4),
    ("boring", -1.3),
    ("broken", -2.1),
    ("crash", -1.7),
    ("crisis", -3.1),
    ("cry", -2.1),
    ("damage", -2.2),
    ("danger", -2.4),
    ("dangerous", -2.1),
    ("dead", -3.3),
    ("death", -2.9),
    ("die", -2.9),
    ("difficult", -1.5),
    ("disappoint", -2.3),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disaster", -3.1),
    ("doubt", -1.5),
    ("error", -1.7),
    ("evil", -3.4),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fear", -2.2),
    ("fraud", -2.8),
    ("guilty", -1.8),
    ("hate", -2.7),
    ("hated", -3.2),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("kill", -3.7),
    ("killed", -3.5),
    ("lonely", -1.5),
    ("lose", -1.7),
    ("loss", -1.3),
    ("lost", -1.3),
    ("mess", -1.5),
    ("nasty", -2.6),
    ("no", -1.2),
    ("pain", -2.3),
    ("poor", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("reject", -1.7),
    ("rejected", -2.3),
    ("risk", -1.1),
    ("sad", -2.1),
    ("scam", -2.7),
    ("scared", -2.2),
    ("shame", -2.1),
    ("sick", -2.3),
    ("stress", -1.8),
    ("stupid", -2.4),
    ("terrible", -2.1),
    ("tired", -1.9),
    ("ugly", -2.3),
    ("unfortunately", -1.6),
    ("useless", -1.8),
    ("violence", -3.1),
    ("war", -2.9),
    ("weak", -1.9),
    ("worried", -1.2),
    ("worry", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
];

const NEGATIONS: &[&str] = &[
    "aint", "ain't", "arent", "aren't", "cannot", "cant", "can't", "couldnt", "couldn't",
    "didnt", "didn't", "doesnt", "doesn't", "dont", "don't", "hadnt", "hadn't", "hasnt",
    "hasn't", "havent", "haven't", "isnt", "isn't", "neither", "never", "none", "nope", "nor",
    "not", "nothing", "nowhere", "rarely", "seldom", "shouldnt", "shouldn't", "wasnt",
    "wasn't", "werent", "weren't", "without", "wont", "won't", "wouldnt", "wouldn't",
];

const INCREMENTS: &[&str] = &[
    "absolutely", "amazingly", "completely", "considerably", "deeply", "enormously", "entirely",
    "especially", "exceptionally", "extremely", "greatly", "highly", "hugely", "incredibly",
    "intensely", "more", "most", "particularly", "purely", "quite", "really", "remarkably",
    "so", "substantially", "thoroughly", "totally", "tremendously", "utterly", "very",
];

const DECREMENTS: &[&str] = &[
    "almost", "barely", "hardly", "less", "little", "marginally", "occasionally", "partly",
    "scarcely", "slightly", "somewhat",
];

static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| VALENCES.iter().copied().collect());

static NEGATION_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| NEGATIONS.iter().copied().collect());

static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    INCREMENTS
        .iter()
        .map(|word| (*word, BOOSTER_INCREMENT))
        .chain(DECREMENTS.iter().map(|word| (*word, BOOSTER_DECREMENT)))
        .collect()
});

/// 查询词条情感值（输入应为小写）
pub fn valence(word: &str) -> Option<f64> {
    LEXICON.get(word).copied()
}

/// 是否为否定词（输入应为小写）
pub fn is_negation(word: &str) -> bool {
    NEGATION_SET.contains(word) || word.contains("n't")
}

/// 程度副词的增减量（输入应为小写）
pub fn booster(word: &str) -> Option<f64> {
    BOOSTERS.get(word).copied()
}
