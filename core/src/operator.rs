use backend::layouts::Opcode;

/// Every operator of the public surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    And,
    Or,
    Xor,
    Shl,
    Shr,
    Eq,
    Ne,
    Ge,
    Gt,
    Le,
    Lt,
    Min,
    Max,
    Negate,
    Not,
    Select,
    Cast,
    Verify,
    TrivialEncrypt,
    Reencrypt,
    PublicKeyFetch,
    Require,
    OptimisticRequire,
}

impl Operator {
    /// External operation code, `None` for operators composed of other calls.
    pub const fn opcode(self) -> Option<Opcode> {
        Some(match self {
            Operator::Add => Opcode::Add,
            Operator::Sub => Opcode::Subtract,
            Operator::Mul => Opcode::Multiply,
            Operator::And => Opcode::BitwiseAnd,
            Operator::Or => Opcode::BitwiseOr,
            Operator::Xor => Opcode::BitwiseXor,
            Operator::Shl => Opcode::ShiftLeft,
            Operator::Shr => Opcode::ShiftRight,
            Operator::Eq => Opcode::Equal,
            Operator::Ne => Opcode::NotEqual,
            Operator::Ge => Opcode::GreaterThanOrEqual,
            Operator::Gt => Opcode::GreaterThan,
            Operator::Le => Opcode::LessThanOrEqual,
            Operator::Lt => Opcode::LessThan,
            Operator::Min => Opcode::Min,
            Operator::Max => Opcode::Max,
            Operator::Negate => Opcode::Negate,
            Operator::Not => Opcode::Not,
            Operator::Select => return None,
            Operator::Cast => Opcode::Cast,
            Operator::Verify => Opcode::Verify,
            Operator::TrivialEncrypt => Opcode::TrivialEncrypt,
            Operator::Reencrypt => Opcode::Reencrypt,
            Operator::PublicKeyFetch => Opcode::FhePubKey,
            Operator::Require => Opcode::Require,
            Operator::OptimisticRequire => Opcode::OptimisticRequire,
        })
    }

    /// Number of operands taken from the caller.
    pub const fn arity(self) -> usize {
        match self {
            Operator::Select => 3,
            Operator::PublicKeyFetch => 0,
            Operator::Negate
            | Operator::Not
            | Operator::Cast
            | Operator::Verify
            | Operator::TrivialEncrypt
            | Operator::Require
            | Operator::OptimisticRequire => 1,
            _ => 2,
        }
    }
}

/// Operators taking two operands, dispatched through the promotion table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    And,
    Or,
    Xor,
    Shl,
    Shr,
    Eq,
    Ne,
    Ge,
    Gt,
    Le,
    Lt,
    Min,
    Max,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 16] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::Xor,
        BinaryOp::Shl,
        BinaryOp::Shr,
        BinaryOp::Eq,
        BinaryOp::Ne,
        BinaryOp::Ge,
        BinaryOp::Gt,
        BinaryOp::Le,
        BinaryOp::Lt,
        BinaryOp::Min,
        BinaryOp::Max,
    ];

    pub const fn operator(self) -> Operator {
        match self {
            BinaryOp::Add => Operator::Add,
            BinaryOp::Sub => Operator::Sub,
            BinaryOp::Mul => Operator::Mul,
            BinaryOp::And => Operator::And,
            BinaryOp::Or => Operator::Or,
            BinaryOp::Xor => Operator::Xor,
            BinaryOp::Shl => Operator::Shl,
            BinaryOp::Shr => Operator::Shr,
            BinaryOp::Eq => Operator::Eq,
            BinaryOp::Ne => Operator::Ne,
            BinaryOp::Ge => Operator::Ge,
            BinaryOp::Gt => Operator::Gt,
            BinaryOp::Le => Operator::Le,
            BinaryOp::Lt => Operator::Lt,
            BinaryOp::Min => Operator::Min,
            BinaryOp::Max => Operator::Max,
        }
    }

    pub const fn opcode(self) -> Opcode {
        match self {
            BinaryOp::Add => Opcode::Add,
            BinaryOp::Sub => Opcode::Subtract,
            BinaryOp::Mul => Opcode::Multiply,
            BinaryOp::And => Opcode::BitwiseAnd,
            BinaryOp::Or => Opcode::BitwiseOr,
            BinaryOp::Xor => Opcode::BitwiseXor,
            BinaryOp::Shl => Opcode::ShiftLeft,
            BinaryOp::Shr => Opcode::ShiftRight,
            BinaryOp::Eq => Opcode::Equal,
            BinaryOp::Ne => Opcode::NotEqual,
            BinaryOp::Ge => Opcode::GreaterThanOrEqual,
            BinaryOp::Gt => Opcode::GreaterThan,
            BinaryOp::Le => Opcode::LessThanOrEqual,
            BinaryOp::Lt => Opcode::LessThan,
            BinaryOp::Min => Opcode::Min,
            BinaryOp::Max => Opcode::Max,
        }
    }

    /// The operator giving the same result with operands exchanged, for the
    /// non-symmetric comparisons. Every other operator maps to itself.
    pub const fn mirror(self) -> Self {
        match self {
            BinaryOp::Ge => BinaryOp::Le,
            BinaryOp::Le => BinaryOp::Ge,
            BinaryOp::Gt => BinaryOp::Lt,
            BinaryOp::Lt => BinaryOp::Gt,
            other => other,
        }
    }

    pub const fn is_ordering(self) -> bool {
        matches!(self, BinaryOp::Ge | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Lt)
    }

    pub const fn is_bitwise(self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or | BinaryOp::Xor)
    }

    pub const fn accepts_scalar(self) -> bool {
        !self.is_bitwise()
    }

    /// Add and Sub skip the call when one operand is zero.
    pub const fn has_zero_shortcut(self) -> bool {
        matches!(self, BinaryOp::Add | BinaryOp::Sub)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Negate,
    Not,
}

impl UnaryOp {
    pub const fn operator(self) -> Operator {
        match self {
            UnaryOp::Negate => Operator::Negate,
            UnaryOp::Not => Operator::Not,
        }
    }

    pub const fn opcode(self) -> Opcode {
        match self {
            UnaryOp::Negate => Opcode::Negate,
            UnaryOp::Not => Opcode::Not,
        }
    }
}
