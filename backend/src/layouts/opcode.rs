/// Operation codes of the coprocessor call boundary.
///
/// The table is fixed and shared read-only by every unit of work.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    Add = 65,
    Verify = 66,
    Reencrypt = 67,
    FhePubKey = 68,
    Require = 69,
    LessThanOrEqual = 70,
    Subtract = 71,
    Multiply = 72,
    LessThan = 73,
    OptimisticRequire = 75,
    Cast = 76,
    TrivialEncrypt = 77,
    BitwiseAnd = 78,
    BitwiseOr = 79,
    BitwiseXor = 80,
    Equal = 81,
    GreaterThanOrEqual = 82,
    GreaterThan = 83,
    ShiftLeft = 84,
    ShiftRight = 85,
    NotEqual = 86,
    Min = 87,
    Max = 88,
    Negate = 89,
    Not = 90,
}

impl Opcode {
    pub const ALL: [Opcode; 25] = [
        Opcode::Add,
        Opcode::Verify,
        Opcode::Reencrypt,
        Opcode::FhePubKey,
        Opcode::Require,
        Opcode::LessThanOrEqual,
        Opcode::Subtract,
        Opcode::Multiply,
        Opcode::LessThan,
        Opcode::OptimisticRequire,
        Opcode::Cast,
        Opcode::TrivialEncrypt,
        Opcode::BitwiseAnd,
        Opcode::BitwiseOr,
        Opcode::BitwiseXor,
        Opcode::Equal,
        Opcode::GreaterThanOrEqual,
        Opcode::GreaterThan,
        Opcode::ShiftLeft,
        Opcode::ShiftRight,
        Opcode::NotEqual,
        Opcode::Min,
        Opcode::Max,
        Opcode::Negate,
        Opcode::Not,
    ];

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Opcode> {
        Self::ALL.iter().copied().find(|op| op.code() == code)
    }
}
