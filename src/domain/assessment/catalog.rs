//! Question catalog for the DASS-42 instrument and its DASS-21 subset.
//!
//! Both sets are built once on first use and shared read-only afterwards.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Identifier of a questionnaire item, e.g. `Q1A`.
///
/// Identifiers are stable across the short and full sets. They order by
/// catalog position, so `Q2A` sorts before `Q10A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct QuestionId(&'static str);

impl QuestionId {
    /// Looks up an identifier in the full catalog.
    pub fn find(id: &str) -> Option<Self> {
        FULL_ITEMS
            .iter()
            .find(|(key, _)| *key == id)
            .map(|&(key, _)| QuestionId(key))
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Zero-based position in the full catalog.
    pub fn position(&self) -> usize {
        FULL_ITEMS
            .iter()
            .position(|(key, _)| *key == self.0)
            .unwrap_or(usize::MAX)
    }
}

impl Ord for QuestionId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position().cmp(&other.position())
    }
}

impl PartialOrd for QuestionId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A catalog entry: identifier plus prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
}

/// Which questionnaire the user is taking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSet {
    /// DASS-21, 21 items.
    Short,
    /// DASS-42, 42 items.
    Full,
}

impl QuestionSet {
    /// Ordered questions for this set.
    pub fn questions(&self) -> &'static [Question] {
        match self {
            QuestionSet::Short => &SHORT_SET,
            QuestionSet::Full => &FULL_SET,
        }
    }

    /// Number of questions in this set.
    pub fn len(&self) -> usize {
        self.questions().len()
    }

    /// Never true for the built-in sets; provided alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.questions().is_empty()
    }

    /// Returns the question at a zero-based position.
    pub fn question(&self, index: usize) -> Option<&'static Question> {
        self.questions().get(index)
    }

    /// Human-readable name used in assistant messages.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionSet::Short => "short",
            QuestionSet::Full => "full",
        }
    }
}

static FULL_SET: Lazy<Vec<Question>> = Lazy::new(|| {
    FULL_ITEMS
        .iter()
        .map(|&(id, prompt)| Question {
            id: QuestionId(id),
            prompt,
        })
        .collect()
});

// Filtering the full set keeps the full catalog's relative ordering.
static SHORT_SET: Lazy<Vec<Question>> = Lazy::new(|| {
    FULL_SET
        .iter()
        .filter(|q| SHORT_IDS.contains(&q.id.as_str()))
        .copied()
        .collect()
});

static SHORT_IDS: [&str; 21] = [
    "Q1A", "Q2A", "Q3A", "Q6A", "Q7A", "Q8A", "Q11A", "Q12A", "Q13A", "Q14A", "Q18A", "Q20A",
    "Q23A", "Q25A", "Q26A", "Q28A", "Q30A", "Q33A", "Q34A", "Q36A", "Q41A",
];

static FULL_ITEMS: [(&str, &str); 42] = [
    ("Q1A", "I found myself getting upset by quite trivial things."),
    ("Q2A", "I was aware of dryness of my mouth."),
    ("Q3A", "I couldn't seem to experience any positive feeling at all."),
    ("Q4A", "I experienced breathing difficulty."),
    ("Q5A", "I just couldn't seem to get going."),
    ("Q6A", "I tended to over-react to situations."),
    ("Q7A", "I had a feeling of shakiness."),
    ("Q8A", "I found it difficult to relax."),
    ("Q9A", "I found myself in situations that made me so anxious I was most relieved when they ended."),
    ("Q10A", "I felt that I had nothing to look forward to."),
    ("Q11A", "I found myself getting upset rather easily."),
    ("Q12A", "I felt that I was using a lot of nervous energy."),
    ("Q13A", "I felt sad and depressed."),
    ("Q14A", "I found myself getting impatient when I was delayed."),
    ("Q15A", "I had a feeling of faintness."),
    ("Q16A", "I felt that I had lost interest in just about everything."),
    ("Q17A", "I felt I wasn't worth much as a person."),
    ("Q18A", "I felt that I was rather touchy."),
    ("Q19A", "I perspired noticeably in the absence of high temperatures."),
    ("Q20A", "I felt scared without any good reason."),
    ("Q21A", "I felt that life wasn't worthwhile."),
    ("Q22A", "I found it hard to wind down."),
    ("Q23A", "I had difficulty in swallowing."),
    ("Q24A", "I couldn't seem to get any enjoyment out of the things I did."),
    ("Q25A", "I was aware of the action of my heart in the absence of physical exertion."),
    ("Q26A", "I felt down-hearted and blue."),
    ("Q27A", "I found that I was very irritable."),
    ("Q28A", "I felt I was close to panic."),
    ("Q29A", "I found it hard to calm down after something upset me."),
    ("Q30A", "I feared that I would be 'thrown' by some trivial but unfamiliar task."),
    ("Q31A", "I was unable to become enthusiastic about anything."),
    ("Q32A", "I found it difficult to tolerate interruptions to what I was doing."),
    ("Q33A", "I was in a state of nervous tension."),
    ("Q34A", "I felt I was pretty worthless."),
    ("Q35A", "I was intolerant of anything that kept me from getting on with what I was doing."),
    ("Q36A", "I felt terrified."),
    ("Q37A", "I could see nothing in the future to be hopeful about."),
    ("Q38A", "I felt that life was meaningless."),
    ("Q39A", "I found myself getting agitated."),
    ("Q40A", "I was worried about situations in which I might panic."),
    ("Q41A", "I experienced trembling."),
    ("Q42A", "I found it difficult to work up the initiative to do things."),
];
