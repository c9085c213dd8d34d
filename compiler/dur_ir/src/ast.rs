//! Syntax tree nodes.
//!
//! Only the shapes the lint distinguishes are modelled; everything a front
//! end lowers must map onto one of them. Children are arena indices.

use std::num::FpCategory;

use dur_types::Idx;

use crate::{DeclId, ExprId, ExprRange, Name, Span, StmtRange};

/// Expression node with its resolved static type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    /// Type recorded by the type checker; `Idx::NONE` when it recorded none.
    pub ty: Idx,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span, ty: Idx) -> Self {
        Expr { kind, span, ty }
    }
}

/// Expression variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal: `10`, `0x10`
    Int(u64),

    /// Float literal (stored as bits for Hash)
    Float(u64),

    /// String literal (interned)
    Str(Name),

    /// Identifier reference: `timeout`, `time`
    Ident(Name),

    /// Field name used as a struct-literal key: `DurationField` in
    /// `TestStruct{DurationField: 20}`. Never resolved as a variable.
    Field(Name),

    /// Binary operation: `left op right`
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Unary operation: `-x`, `!ok`
    Unary { op: UnaryOp, operand: ExprId },

    /// Parenthesized expression: `(x)`
    Paren(ExprId),

    /// Call or conversion: `time.Sleep(d)`, `time.Duration(5)`
    Call { func: ExprId, args: ExprRange },

    /// Qualified access: `time.Second`, `cfg.Timeout`
    Selector { base: ExprId, field: Name },

    /// Composite literal: `TestStruct{...}`, `[]time.Duration{...}`
    Composite { elems: ExprRange },

    /// Key-value element of a composite literal: `Timeout: 10`
    KeyValue { key: ExprId, value: ExprId },
}

impl ExprKind {
    /// Check if this is a numeric literal whose value is exactly zero.
    pub fn is_zero_literal(&self) -> bool {
        match *self {
            ExprKind::Int(v) => v == 0,
            ExprKind::Float(bits) => f64::from_bits(bits).classify() == FpCategory::Zero,
            _ => false,
        }
    }

    /// Check if this is a literal of any kind.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            ExprKind::Int(_) | ExprKind::Float(_) | ExprKind::Str(_)
        )
    }
}

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

impl BinaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl UnaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }
}

/// `const` or `var`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclKind {
    Const,
    Var,
}

impl DeclKind {
    pub fn keyword(self) -> &'static str {
        match self {
            DeclKind::Const => "const",
            DeclKind::Var => "var",
        }
    }
}

/// A declared name and where it was declared.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DeclName {
    pub name: Name,
    pub span: Span,
}

/// One `const`/`var` declaration group.
///
/// `const ignored, typedConst2 = 10, time.Duration(2)` is a single spec with
/// two names and two values matched by position.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ValueSpec {
    pub kind: DeclKind,
    pub names: Vec<DeclName>,
    /// Explicitly declared type, `None` for `const x = ...`.
    pub ty: Option<Idx>,
    pub values: ExprRange,
    pub span: Span,
}

impl ValueSpec {
    /// Position of `name` among the spec's declared names.
    pub fn position_of(&self, name: Name) -> Option<usize> {
        self.names.iter().position(|n| n.name == name)
    }
}

/// Statement node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

/// Statement variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `a = x`, `a, b = x, y`, or with `define` set, `a := x`
    Assign {
        lhs: ExprRange,
        rhs: ExprRange,
        define: bool,
    },
    /// Local `const`/`var` declaration
    Decl(DeclId),
    /// Expression statement: `time.Sleep(10)`
    Expr(ExprId),
    Return(ExprRange),
    /// Nested block `{ ... }`
    Block(StmtRange),
}

/// Function parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub name: Name,
    pub span: Span,
    pub ty: Idx,
}

/// Function declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Function {
    pub name: Name,
    pub span: Span,
    pub params: Vec<Param>,
    pub body: StmtRange,
}

/// Top-level item of a file.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Item {
    Decl(DeclId),
    Func(Function),
}
