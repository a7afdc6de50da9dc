//! Syntax tree for the collider rule language.
//!
//! The grammar is closed: a source line is either empty, a group
//! declaration, or a collision declaration.

use std::fmt;

use crate::span::Span;
use crate::token::TokenKind;

/// A parsed source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    /// A blank or comment-only line.
    Empty,
    /// `group "Name" {A, $Other}`
    Group(GroupDeclaration),
    /// `A > B`
    Collision(CollisionDeclaration),
}

impl Statement {
    /// Returns true if this is an empty statement.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the group declaration, or None if not a group declaration.
    #[must_use]
    pub const fn as_group(&self) -> Option<&GroupDeclaration> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Returns the collision declaration, or None if not a collision declaration.
    #[must_use]
    pub const fn as_collision(&self) -> Option<&CollisionDeclaration> {
        match self {
            Self::Collision(collision) => Some(collision),
            _ => None,
        }
    }
}

/// A named group of abilities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupDeclaration {
    /// The group name, as written between the quotes.
    pub name: String,
    /// Members in declaration order.
    pub operands: Vec<Operand>,
    /// Location of the `group` keyword.
    pub span: Span,
}

/// A collision rule between two operands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollisionDeclaration {
    /// Operand on the left of the operator.
    pub left: Operand,
    /// The operator deciding which side is removed.
    pub operator: Operator,
    /// Operand on the right of the operator.
    pub right: Operand,
}

/// A single reference inside a statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operand {
    /// True for `$name` group references, false for ability names.
    pub is_group_reference: bool,
    /// The literal name, without any `$`.
    pub literal: String,
    /// Location of the literal.
    pub span: Span,
}

impl Operand {
    /// Creates an ability-name operand.
    #[must_use]
    pub fn ability(literal: impl Into<String>, span: Span) -> Self {
        Self {
            is_group_reference: false,
            literal: literal.into(),
            span,
        }
    }

    /// Creates a group-reference operand.
    #[must_use]
    pub fn group(literal: impl Into<String>, span: Span) -> Self {
        Self {
            is_group_reference: true,
            literal: literal.into(),
            span,
        }
    }

    /// Returns the 1-based source line of this operand.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.span.line
    }
}

/// Collision operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `>`: the right side is removed.
    GreaterThan,
    /// `<`: the left side is removed.
    LessThan,
    /// `=`: both sides are removed.
    Equal,
    /// `~`: neither side is removed.
    Tilde,
    /// `x`: any existing rule between the two is deleted.
    X,
}

/// What a collision operator does to the rule set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionEffect {
    /// Delete any rule for the unordered pair.
    Remove,
    /// Register a rule with the given removal flags.
    Register {
        /// Remove the left ability on collision.
        remove_first: bool,
        /// Remove the right ability on collision.
        remove_second: bool,
    },
}

impl Operator {
    /// Returns the operator for a token kind, or None if it is not one.
    #[must_use]
    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::GreaterThan => Some(Self::GreaterThan),
            TokenKind::LessThan => Some(Self::LessThan),
            TokenKind::Equal => Some(Self::Equal),
            TokenKind::Tilde => Some(Self::Tilde),
            TokenKind::X => Some(Self::X),
            _ => None,
        }
    }

    /// Returns the source symbol for this operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::GreaterThan => '>',
            Self::LessThan => '<',
            Self::Equal => '=',
            Self::Tilde => '~',
            Self::X => 'x',
        }
    }

    /// Returns the effect of applying this operator to a pair.
    #[must_use]
    pub const fn effect(self) -> CollisionEffect {
        match self {
            Self::X => CollisionEffect::Remove,
            Self::Tilde => CollisionEffect::Register {
                remove_first: false,
                remove_second: false,
            },
            Self::LessThan => CollisionEffect::Register {
                remove_first: true,
                remove_second: false,
            },
            Self::GreaterThan => CollisionEffect::Register {
                remove_first: false,
                remove_second: true,
            },
            Self::Equal => CollisionEffect::Register {
                remove_first: true,
                remove_second: true,
            },
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_group_reference {
            write!(f, "${}", self.literal)
        } else {
            f.write_str(&self.literal)
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Group(group) => {
                write!(f, "group \"{}\" {{", group.name)?;
                for (i, operand) in group.operands.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{operand}")?;
                }
                f.write_str("}")
            }
            Self::Collision(collision) => write!(
                f,
                "{} {} {}",
                collision.left, collision.operator, collision.right
            ),
        }
    }
}
