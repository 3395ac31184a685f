use rand_core::RngCore;
use rug::{Integer, integer::Order};
use sampling::source::Source;

use crate::{
    codec::{self, BinaryPayload, PUBLIC_KEY_MARKER},
    layouts::{CoprocessorParams, Opcode, Rejection, WidthTag},
    reference::{Plaintext, PlainRefState},
};

/// Seed of the deterministic public key served by the reference backend.
const PUBLIC_KEY_SEED: [u8; 32] = [0x44; 32];

fn malformed(opcode: Opcode) -> Rejection {
    Rejection::new(format!("malformed {opcode:?} payload"))
}

/// Big-endian bytes reduced modulo `2^width.bits()`.
fn reduce(bytes: &[u8], width: WidthTag) -> u64 {
    Integer::from_digits(bytes, Order::MsfBe)
        .keep_bits(width.bits())
        .to_u64_wrapping()
}

pub(super) fn evaluate(
    state: &mut PlainRefState,
    params: &CoprocessorParams,
    opcode: Opcode,
    input: &[u8],
) -> Result<Vec<u8>, Rejection> {
    match opcode {
        Opcode::Negate | Opcode::Not => {
            let a: Plaintext = state.lookup(&codec::decode_word(input).ok_or_else(|| malformed(opcode))?)?;
            let value: u64 = match opcode {
                Opcode::Negate => a.value.wrapping_neg(),
                _ => !a.value,
            };
            Ok(state.mint(Plaintext::new(a.width, value)).to_vec())
        }
        Opcode::Cast => {
            let (word, to) = codec::decode_tagged_word(input).ok_or_else(|| malformed(opcode))?;
            let a: Plaintext = state.lookup(&word)?;
            Ok(state.mint(Plaintext::new(to, a.value)).to_vec())
        }
        Opcode::TrivialEncrypt => {
            let (word, to) = codec::decode_tagged_word(input).ok_or_else(|| malformed(opcode))?;
            Ok(state.mint(Plaintext::new(to, reduce(&word, to))).to_vec())
        }
        Opcode::Verify => {
            let (raw, to) = codec::decode_verify(input).ok_or_else(|| malformed(opcode))?;
            let value: u64 = reduce(raw, to);
            Ok(state.mint(Plaintext::new(to, value)).to_vec())
        }
        Opcode::Require => {
            let a: Plaintext = state.lookup(&codec::decode_word(input).ok_or_else(|| malformed(opcode))?)?;
            if a.value == 0 {
                return Err(Rejection::new("require on a false value"));
            }
            Ok(Vec::new())
        }
        Opcode::OptimisticRequire => {
            let words = codec::decode_words(input).ok_or_else(|| malformed(opcode))?;
            for (i, word) in words.iter().enumerate() {
                let a: Plaintext = state.lookup(word)?;
                if a.width != WidthTag::MAX {
                    return Err(Rejection::new(format!("optimistic require #{i} is {}, not {}", a.width, WidthTag::MAX)));
                }
                if a.value == 0 {
                    return Err(Rejection::new(format!("optimistic require #{i} is false")));
                }
            }
            Ok(Vec::new())
        }
        Opcode::Reencrypt => {
            let (word, public_key) = codec::decode_reencrypt(input).ok_or_else(|| malformed(opcode))?;
            let a: Plaintext = state.lookup(&word)?;
            let sealed_len: usize = params.envelope_overhead_bytes + WidthTag::MAX.bytes();
            let mut out: Vec<u8> = header(params, sealed_len);
            out.extend(public_key.iter().cycle().take(params.envelope_overhead_bytes));
            out.extend_from_slice(&a.value.to_be_bytes()[8 - WidthTag::MAX.bytes()..]);
            Ok(out)
        }
        Opcode::FhePubKey => {
            if input != &[PUBLIC_KEY_MARKER][..] {
                return Err(malformed(opcode));
            }
            let mut out: Vec<u8> = header(params, params.public_key_bytes);
            let mut key: Vec<u8> = vec![0u8; params.public_key_bytes];
            Source::new(PUBLIC_KEY_SEED).fill_bytes(&mut key);
            out.extend_from_slice(&key);
            Ok(out)
        }
        _ => binary(state, opcode, input),
    }
}

fn binary(state: &mut PlainRefState, opcode: Opcode, input: &[u8]) -> Result<Vec<u8>, Rejection> {
    let payload: BinaryPayload = codec::decode_binary(input).ok_or_else(|| malformed(opcode))?;
    let a: Plaintext = state.lookup(&payload.a)?;
    let bitwise: bool = matches!(opcode, Opcode::BitwiseAnd | Opcode::BitwiseOr | Opcode::BitwiseXor);

    let b: u64 = if payload.scalar {
        if bitwise {
            return Err(Rejection::new(format!("{opcode:?} takes no plaintext operand")));
        }
        reduce(&payload.b, a.width)
    } else {
        let b: Plaintext = state.lookup(&payload.b)?;
        if b.width != a.width {
            return Err(Rejection::new(format!("{opcode:?} on mismatched widths {} and {}", a.width, b.width)));
        }
        b.value
    };

    let bits: u64 = a.width.bits() as u64;
    let value: u64 = match opcode {
        Opcode::Add => a.value.wrapping_add(b),
        Opcode::Subtract => a.value.wrapping_sub(b),
        Opcode::Multiply => a.value.wrapping_mul(b),
        Opcode::BitwiseAnd => a.value & b,
        Opcode::BitwiseOr => a.value | b,
        Opcode::BitwiseXor => a.value ^ b,
        Opcode::ShiftLeft => a.value << (b % bits),
        Opcode::ShiftRight => a.value >> (b % bits),
        Opcode::Equal => (a.value == b) as u64,
        Opcode::NotEqual => (a.value != b) as u64,
        Opcode::GreaterThanOrEqual => (a.value >= b) as u64,
        Opcode::GreaterThan => (a.value > b) as u64,
        Opcode::LessThanOrEqual => (a.value <= b) as u64,
        Opcode::LessThan => (a.value < b) as u64,
        Opcode::Min => a.value.min(b),
        Opcode::Max => a.value.max(b),
        _ => return Err(Rejection::new(format!("{opcode:?} is not a binary operator"))),
    };
    Ok(state.mint(Plaintext::new(a.width, value)).to_vec())
}

/// Length header: `len` as a big-endian integer right-aligned in the header.
fn header(params: &CoprocessorParams, len: usize) -> Vec<u8> {
    let mut out: Vec<u8> = vec![0u8; params.header_bytes];
    let be: [u8; 8] = (len as u64).to_be_bytes();
    let n: usize = be.len().min(out.len());
    let start: usize = out.len() - n;
    out[start..].copy_from_slice(&be[be.len() - n..]);
    out
}
