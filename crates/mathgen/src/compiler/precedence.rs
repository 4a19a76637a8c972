//! # Binding Strength
//!
//! How tightly a piece of emitted JavaScript holds together. Text emitted at
//! strength `S` can be spliced unparenthesized into any slot that requires
//! `S` or weaker; a slot requiring more must wrap it in parentheses.

use std::fmt;

/// Ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BindingStrength {
    None,
    Equality,
    Additive,
    Multiplicative,
    UnaryPrefix,
    UnaryPostfix,
    Atomic,
}

impl BindingStrength {
    /// Function calls and member access share the postfix level.
    pub const FUNCTION_CALL: BindingStrength = BindingStrength::UnaryPostfix;

    /// The next level up, saturating at `Atomic`.
    pub fn tighter(self) -> Self {
        match self {
            BindingStrength::None => BindingStrength::Equality,
            BindingStrength::Equality => BindingStrength::Additive,
            BindingStrength::Additive => BindingStrength::Multiplicative,
            BindingStrength::Multiplicative => BindingStrength::UnaryPrefix,
            BindingStrength::UnaryPrefix => BindingStrength::UnaryPostfix,
            BindingStrength::UnaryPostfix | BindingStrength::Atomic => BindingStrength::Atomic,
        }
    }
}

impl fmt::Display for BindingStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BindingStrength::None => "none",
            BindingStrength::Equality => "equality",
            BindingStrength::Additive => "additive",
            BindingStrength::Multiplicative => "multiplicative",
            BindingStrength::UnaryPrefix => "unary-prefix",
            BindingStrength::UnaryPostfix => "unary-postfix",
            BindingStrength::Atomic => "atomic",
        };
        f.write_str(name)
    }
}

/// True iff `a` binds at least as tightly as `b`.
pub fn stronger_or_equal(a: BindingStrength, b: BindingStrength) -> bool {
    a >= b
}
