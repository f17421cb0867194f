use std::collections::HashMap;

/// (polarity, subjectivity) pair for one text. Polarity lives in
/// [-1.0, 1.0], subjectivity in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Rule-based sentiment lexicon: word weights plus negation and intensifier
/// handling. A negation flips the sign of the next matched word; an
/// intensifier scales it.
pub struct SentimentLexicon {
    /// Word to (polarity, subjectivity) mapping
    words: HashMap<String, (f64, f64)>,
    /// Negation words
    negations: Vec<String>,
    /// Intensifier words
    intensifiers: HashMap<String, f64>,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentLexicon {
    pub fn new() -> Self {
        let mut words = HashMap::new();

        let positive_words = vec![
            ("love", (0.5, 0.6)),
            ("like", (0.3, 0.4)),
            ("good", (0.7, 0.6)),
            ("great", (0.8, 0.75)),
            ("nice", (0.6, 1.0)),
            ("best", (1.0, 0.3)),
            ("better", (0.5, 0.5)),
            ("awesome", (1.0, 1.0)),
            ("amazing", (0.6, 0.9)),
            ("excellent", (1.0, 1.0)),
            ("wonderful", (1.0, 1.0)),
            ("fantastic", (0.9, 0.9)),
            ("perfect", (1.0, 1.0)),
            ("beautiful", (0.85, 1.0)),
            ("happy", (0.8, 1.0)),
            ("glad", (0.5, 1.0)),
            ("hope", (0.4, 0.6)),
            ("optimistic", (0.6, 0.8)),
            ("confident", (0.5, 0.7)),
            ("win", (0.8, 0.4)),
            ("success", (0.75, 0.5)),
            ("successful", (0.75, 0.95)),
            ("strong", (0.45, 0.55)),
            ("growth", (0.6, 0.4)),
            ("gain", (0.5, 0.4)),
            ("profit", (0.6, 0.4)),
            ("boom", (0.7, 0.6)),
            ("surge", (0.6, 0.5)),
            ("rally", (0.6, 0.5)),
            ("recovery", (0.5, 0.4)),
            ("improve", (0.5, 0.45)),
        ];

        let negative_words = vec![
            ("hate", (-0.8, 0.9)),
            ("bad", (-0.7, 0.67)),
            ("terrible", (-1.0, 1.0)),
            ("awful", (-1.0, 1.0)),
            ("horrible", (-1.0, 1.0)),
            ("worst", (-1.0, 0.3)),
            ("worse", (-0.5, 0.5)),
            ("sad", (-0.5, 1.0)),
            ("angry", (-0.5, 1.0)),
            ("poor", (-0.4, 0.6)),
            ("weak", (-0.5, 0.55)),
            ("wrong", (-0.5, 0.5)),
            ("problem", (-0.5, 0.4)),
            ("fear", (-0.6, 0.8)),
            ("worry", (-0.5, 0.8)),
            ("loss", (-0.6, 0.4)),
            ("lose", (-0.5, 0.4)),
            ("fail", (-0.7, 0.6)),
            ("failure", (-0.7, 0.6)),
            ("decline", (-0.6, 0.4)),
            ("drop", (-0.6, 0.4)),
            ("plunge", (-0.8, 0.6)),
            ("crash", (-0.9, 0.7)),
            ("collapse", (-0.8, 0.6)),
            ("crisis", (-0.8, 0.6)),
            ("recession", (-0.7, 0.5)),
            ("inflation", (-0.4, 0.3)),
            ("unemployment", (-0.5, 0.3)),
            ("debt", (-0.4, 0.3)),
            ("corrupt", (-0.8, 0.8)),
            ("scam", (-0.9, 0.9)),
            ("fraud", (-0.9, 0.8)),
            ("disaster", (-0.9, 0.8)),
        ];

        for (word, weights) in positive_words {
            words.insert(word.to_string(), weights);
        }

        for (word, weights) in negative_words {
            words.insert(word.to_string(), weights);
        }

        let negations = vec![
            "not", "no", "never", "neither", "nothing", "none", "cannot", "cant", "can't",
            "dont", "don't", "doesnt", "doesn't", "didnt", "didn't", "wont", "won't", "isnt",
            "isn't", "wasnt", "wasn't", "hardly", "barely",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let mut intensifiers = HashMap::new();
        intensifiers.insert("very".to_string(), 1.3);
        intensifiers.insert("really".to_string(), 1.3);
        intensifiers.insert("so".to_string(), 1.2);
        intensifiers.insert("too".to_string(), 1.2);
        intensifiers.insert("quite".to_string(), 1.1);
        intensifiers.insert("extremely".to_string(), 1.8);
        intensifiers.insert("incredibly".to_string(), 1.7);
        intensifiers.insert("absolutely".to_string(), 1.6);
        intensifiers.insert("totally".to_string(), 1.5);
        intensifiers.insert("highly".to_string(), 1.5);
        intensifiers.insert("slightly".to_string(), 0.6);
        intensifiers.insert("somewhat".to_string(), 0.7);

        Self {
            words,
            negations,
            intensifiers,
        }
    }

    fn weights_of(&self, word: &str) -> Option<(f64, f64)> {
        self.words.get(word).copied()
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.iter().any(|n| n == word)
    }

    fn intensity_of(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    /// Score one text: mean of matched word weights, negation-flipped and
    /// intensity-scaled, clamped to the score ranges. A text with no
    /// lexicon hits scores (0.0, 0.0).
    pub fn analyze(&self, text: &str) -> Sentiment {
        let mut polarities: Vec<f64> = Vec::new();
        let mut subjectivities: Vec<f64> = Vec::new();

        let mut negate_next = false;
        let mut intensity: f64 = 1.0;

        for token in text.split_whitespace() {
            let word = token
                .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase();
            if word.is_empty() {
                continue;
            }

            if self.is_negation(&word) {
                negate_next = true;
                continue;
            }

            if let Some(mult) = self.intensity_of(&word) {
                intensity = mult;
                continue;
            }

            if let Some((mut polarity, subjectivity)) = self.weights_of(&word) {
                if negate_next {
                    polarity = -polarity;
                    negate_next = false;
                }

                polarity *= intensity;
                let subjectivity = (subjectivity * intensity).min(1.0);
                intensity = 1.0;

                polarities.push(polarity);
                subjectivities.push(subjectivity);
            } else {
                // modifiers only reach the directly following word
                negate_next = false;
                intensity = 1.0;
            }
        }

        if polarities.is_empty() {
            return Sentiment {
                polarity: 0.0,
                subjectivity: 0.0,
            };
        }

        let polarity = polarities.iter().sum::<f64>() / polarities.len() as f64;
        let subjectivity = subjectivities.iter().sum::<f64>() / subjectivities.len() as f64;

        Sentiment {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}

#[derive(Clone)]
pub struct SentimentService {
    lexicon: std::sync::Arc<SentimentLexicon>,
}

impl Default for SentimentService {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentService {
    pub fn new() -> Self {
        Self {
            lexicon: std::sync::Arc::new(SentimentLexicon::new()),
        }
    }

    pub fn score(&self, text: &str) -> Sentiment {
        self.lexicon.analyze(text)
    }
}
