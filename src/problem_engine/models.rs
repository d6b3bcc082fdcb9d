use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Menu-facing enums
// ---------------------------------------------------------------------------

/// Operation family picked from the game menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Addition,
    Subtraction,
    AddSubtract,
    Multiplication,
    Division,
    MoreComplex,
}

impl Topic {
    /// Fixed menu symbol. The minus is U+2212 (same glyph width as `+`),
    /// never an ASCII hyphen.
    pub fn symbol(self) -> &'static str {
        match self {
            Topic::Addition       => "+",
            Topic::Subtraction    => "−",
            Topic::AddSubtract    => "±",
            Topic::Multiplication => "×",
            Topic::Division       => "÷",
            Topic::MoreComplex    => "∗",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Topic::Addition       => "Addition",
            Topic::Subtraction    => "Subtraction",
            Topic::AddSubtract    => "Add & Subtract",
            Topic::Multiplication => "Multiplication",
            Topic::Division       => "Division",
            Topic::MoreComplex    => "More Complex",
        };
        write!(f, "{}", s)
    }
}

/// Named operand range, chosen once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    SingleDigit,
    Teens,
    TwoDigit,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tier::SingleDigit => "Single Digit",
            Tier::Teens       => "Teens",
            Tier::TwoDigit    => "Two Digit",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Problem shape
// ---------------------------------------------------------------------------

/// The arithmetic shape that produced a problem. The simple patterns map
/// one-to-one onto their topic; the four compound patterns all belong to
/// [`Topic::MoreComplex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationPattern {
    Add,
    Subtract,
    AddSubtract,
    Multiply,
    Divide,
    MultiplyAdd,
    MultiplySubtract,
    DivideAdd,
    DivideSubtract,
}

/// One fully-specified quiz question: operands, the shape that produced
/// them, the correct answer, and three shuffled answer choices.
///
/// Immutable after construction. Built only through
/// [`generate_problem`](crate::generate_problem) (or a topic builder in
/// tests), which upholds the invariants: the correct answer is one of the
/// choices, choices are pairwise at least 3 apart and non-negative,
/// subtraction never dips below zero at any step, and division is exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub a: i32,
    pub b: i32,
    pub c: Option<i32>,
    pub pattern: OperationPattern,
    pub correct_answer: i32,
    pub choices: [i32; 3],
}

impl Problem {
    /// Human-readable question text, e.g. `"7 × 3 + 2 = ?"`.
    ///
    /// Pure function of operands + pattern. Minus is always U+2212.
    pub fn display_text(&self) -> String {
        let (a, b) = (self.a, self.b);
        match self.pattern {
            OperationPattern::Add         => format!("{} + {} = ?", a, b),
            OperationPattern::Subtract    => format!("{} − {} = ?", a, b),
            OperationPattern::AddSubtract => {
                format!("{} + {} − {} = ?", a, b, self.c.unwrap_or(0))
            }
            OperationPattern::Multiply    => format!("{} × {} = ?", a, b),
            OperationPattern::Divide      => format!("{} ÷ {} = ?", a, b),
            OperationPattern::MultiplyAdd => {
                format!("{} × {} + {} = ?", a, b, self.c.unwrap_or(0))
            }
            OperationPattern::MultiplySubtract => {
                format!("{} × {} − {} = ?", a, b, self.c.unwrap_or(0))
            }
            OperationPattern::DivideAdd => {
                format!("{} ÷ {} + {} = ?", a, b, self.c.unwrap_or(0))
            }
            OperationPattern::DivideSubtract => {
                format!("{} ÷ {} − {} = ?", a, b, self.c.unwrap_or(0))
            }
        }
    }

    /// Deduplication signature. Commutative operand pairs (sums and
    /// products) are normalized smaller-first so `3 + 7` and `7 + 3`
    /// collide regardless of generation order.
    pub fn unique_key(&self) -> String {
        let (lo, hi) = if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        };
        let c = self.c.unwrap_or(0);
        match self.pattern {
            OperationPattern::Add              => format!("add_{}_{}", lo, hi),
            OperationPattern::Subtract         => format!("sub_{}_{}", self.a, self.b),
            OperationPattern::AddSubtract      => format!("addsub_{}_{}_{}", self.a, self.b, c),
            OperationPattern::Multiply         => format!("mul_{}_{}", lo, hi),
            OperationPattern::Divide           => format!("div_{}_{}", self.a, self.b),
            OperationPattern::MultiplyAdd      => format!("muladd_{}_{}_{}", lo, hi, c),
            OperationPattern::MultiplySubtract => format!("mulsub_{}_{}_{}", lo, hi, c),
            OperationPattern::DivideAdd        => format!("divadd_{}_{}_{}", self.a, self.b, c),
            OperationPattern::DivideSubtract   => format!("divsub_{}_{}_{}", self.a, self.b, c),
        }
    }
}

// ---------------------------------------------------------------------------
// Request type
// ---------------------------------------------------------------------------

/// Everything needed to ask for one problem.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProblemRequest {
    pub topic: Topic,
    pub tier: Tier,
    /// `Some(seed)` reproduces the exact same problem sequence; `None`
    /// draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl ProblemRequest {
    /// Minimal constructor: topic + tier, entropy-seeded.
    pub fn new(topic: Topic, tier: Tier) -> Self {
        ProblemRequest { topic, tier, rng_seed: None }
    }
}
