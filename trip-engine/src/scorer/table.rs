//! Static scoring tables: questions, options, weights and area profiles.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::{AreaId, ConfigError, OptionId, QuestionId};

/// One selectable option: its weight contribution per area and the stable
/// reason key shown when the option lifts an area into the top ranks.
///
/// Weights are non-negative by type; an area absent from the map
/// contributes zero. The reason key is presentation-independent; display
/// text is resolved separately by `(key, locale)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionRule {
    pub id: OptionId,
    pub reason: String,
    #[serde(default)]
    pub weights: HashMap<AreaId, u32>,
}

impl OptionRule {
    /// Create an option with no weights yet.
    pub fn new(id: impl Into<OptionId>, reason: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            reason: reason.into(),
            weights: HashMap::new(),
        }
    }

    /// Builder-style weight for one area.
    pub fn weigh(mut self, area: impl Into<AreaId>, weight: u32) -> Self {
        self.weights.insert(area.into(), weight);
        self
    }

    /// The weight this option contributes to an area (0 if unspecified).
    pub fn weight_for(&self, area: &AreaId) -> u32 {
        self.weights.get(area).copied().unwrap_or(0)
    }
}

/// A multiple-choice question with its options in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub options: Vec<OptionRule>,
}

impl Question {
    pub fn new(id: impl Into<QuestionId>, options: Vec<OptionRule>) -> Self {
        Self {
            id: id.into(),
            options,
        }
    }

    /// Find an option by id.
    pub fn option(&self, id: &OptionId) -> Option<&OptionRule> {
        self.options.iter().find(|o| &o.id == id)
    }
}

/// A candidate area's static profile: its id and the fixed attribute
/// vector used for pairwise comparison. Attribute scores are keyed by
/// stable attribute ids; an unspecified attribute scores zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaProfile {
    pub id: AreaId,
    #[serde(default)]
    pub attributes: HashMap<String, u32>,
}

impl AreaProfile {
    pub fn new(id: impl Into<AreaId>) -> Self {
        Self {
            id: id.into(),
            attributes: HashMap::new(),
        }
    }

    /// Builder-style attribute score.
    pub fn attr(mut self, attribute: impl Into<String>, score: u32) -> Self {
        self.attributes.insert(attribute.into(), score);
        self
    }

    /// Score for an attribute (0 if unspecified).
    pub fn attribute(&self, attribute: &str) -> u32 {
        self.attributes.get(attribute).copied().unwrap_or(0)
    }
}

/// Raw bank shape used for deserialization; validated into a
/// [`QuestionBank`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBankSpec {
    pub questions: Vec<Question>,
    pub areas: Vec<AreaProfile>,
}

/// The full question bank plus the candidate areas in declaration order.
///
/// Declaration order is load-bearing: it is the ranking tie-break, so it
/// is preserved exactly as configured. Validation is eager: duplicate
/// question, option or area ids and weights referencing undeclared areas
/// are `ConfigError`s at build time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "QuestionBankSpec", into = "QuestionBankSpec")]
pub struct QuestionBank {
    questions: Vec<Question>,
    areas: Vec<AreaProfile>,
}

impl QuestionBank {
    /// Build a validated bank.
    pub fn new(questions: Vec<Question>, areas: Vec<AreaProfile>) -> Result<Self, ConfigError> {
        let mut area_ids = HashSet::new();
        for area in &areas {
            if !area_ids.insert(area.id.clone()) {
                return Err(ConfigError::DuplicateArea(area.id.clone()));
            }
        }

        let mut question_ids = HashSet::new();
        for question in &questions {
            if !question_ids.insert(question.id.clone()) {
                return Err(ConfigError::DuplicateQuestion(question.id.to_string()));
            }

            let mut option_ids = HashSet::new();
            for option in &question.options {
                if !option_ids.insert(option.id.clone()) {
                    return Err(ConfigError::DuplicateOption {
                        question: question.id.to_string(),
                        option: option.id.to_string(),
                    });
                }
                for area in option.weights.keys() {
                    if !area_ids.contains(area) {
                        return Err(ConfigError::WeightForUnknownArea {
                            question: question.id.to_string(),
                            option: option.id.to_string(),
                            area: area.clone(),
                        });
                    }
                }
            }
        }

        Ok(Self { questions, areas })
    }

    /// Questions in declaration order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Candidate areas in declaration order.
    pub fn areas(&self) -> &[AreaProfile] {
        &self.areas
    }

    /// Find a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    /// Find an area profile by id.
    pub fn area(&self, id: &AreaId) -> Option<&AreaProfile> {
        self.areas.iter().find(|a| &a.id == id)
    }
}

impl TryFrom<QuestionBankSpec> for QuestionBank {
    type Error = ConfigError;

    fn try_from(spec: QuestionBankSpec) -> Result<Self, Self::Error> {
        QuestionBank::new(spec.questions, spec.areas)
    }
}

impl From<QuestionBank> for QuestionBankSpec {
    fn from(bank: QuestionBank) -> QuestionBankSpec {
        QuestionBankSpec {
            questions: bank.questions,
            areas: bank.areas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> QuestionBank {
        QuestionBank::new(
            vec![Question::new(
                "vibe",
                vec![
                    OptionRule::new("nightlife", "reason.vibe.nightlife")
                        .weigh("roppongi", 3)
                        .weigh("shinjuku", 2),
                    OptionRule::new("calm", "reason.vibe.calm").weigh("asakusa", 3),
                ],
            )],
            vec![
                AreaProfile::new("roppongi").attr("nightlife", 5),
                AreaProfile::new("shinjuku"),
                AreaProfile::new("asakusa").attr("calm", 5),
            ],
        )
        .unwrap()
    }

    #[test]
    fn weight_for_unspecified_area_is_zero() {
        let bank = bank();
        let option = bank
            .question(&QuestionId::new("vibe"))
            .unwrap()
            .option(&OptionId::new("nightlife"))
            .unwrap();

        assert_eq!(option.weight_for(&AreaId::new("roppongi")), 3);
        assert_eq!(option.weight_for(&AreaId::new("asakusa")), 0);
    }

    #[test]
    fn attribute_unspecified_is_zero() {
        let bank = bank();
        let area = bank.area(&AreaId::new("shinjuku")).unwrap();
        assert_eq!(area.attribute("nightlife"), 0);
    }

    #[test]
    fn duplicate_question_rejected() {
        let err = QuestionBank::new(
            vec![
                Question::new("vibe", vec![]),
                Question::new("vibe", vec![]),
            ],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateQuestion(q) if q == "vibe"));
    }

    #[test]
    fn duplicate_option_rejected() {
        let err = QuestionBank::new(
            vec![Question::new(
                "vibe",
                vec![
                    OptionRule::new("calm", "r"),
                    OptionRule::new("calm", "r"),
                ],
            )],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateOption { .. }));
    }

    #[test]
    fn weight_for_undeclared_area_rejected() {
        let err = QuestionBank::new(
            vec![Question::new(
                "vibe",
                vec![OptionRule::new("calm", "r").weigh("atlantis", 1)],
            )],
            vec![AreaProfile::new("asakusa")],
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::WeightForUnknownArea { .. }));
    }

    #[test]
    fn duplicate_area_rejected() {
        let err = QuestionBank::new(
            vec![],
            vec![AreaProfile::new("ueno"), AreaProfile::new("ueno")],
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateArea(a) if a == AreaId::new("ueno")));
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let json = r#"{
            "questions": [],
            "areas": [{"id": "ueno"}, {"id": "ueno"}]
        }"#;
        assert!(serde_json::from_str::<QuestionBank>(json).is_err());
    }
}
