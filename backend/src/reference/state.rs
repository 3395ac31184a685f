use fnv::FnvHashMap;
use sampling::source::Source;

use crate::layouts::{Opcode, Rejection, WidthTag, Word};

/// Value behind a reference handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plaintext {
    pub width: WidthTag,
    pub value: u64,
}

impl Plaintext {
    pub fn new(width: WidthTag, value: u64) -> Self {
        Self {
            width,
            value: value & width.mask(),
        }
    }
}

/// One call received by the reference backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallRecord {
    pub opcode: Opcode,
    pub input: Vec<u8>,
}

pub struct PlainRefState {
    store: FnvHashMap<Word, Plaintext>,
    source: Source,
    log: Vec<CallRecord>,
    fail_at: Option<usize>,
}

impl PlainRefState {
    pub fn new(seed: [u8; 32]) -> Self {
        Self {
            store: FnvHashMap::default(),
            source: Source::new(seed),
            log: Vec::new(),
            fail_at: None,
        }
    }

    /// Stores `plaintext` under a fresh non-zero word.
    pub fn mint(&mut self, plaintext: Plaintext) -> Word {
        let word: Word = self.source.next_word_nonzero();
        self.store.insert(word, plaintext);
        word
    }

    pub fn get(&self, word: &Word) -> Option<Plaintext> {
        self.store.get(word).copied()
    }

    pub(crate) fn lookup(&self, word: &Word) -> Result<Plaintext, Rejection> {
        self.get(word).ok_or_else(|| Rejection::new("unknown ciphertext handle"))
    }

    /// Appends a call to the log and returns its index.
    pub(crate) fn record(&mut self, opcode: Opcode, input: &[u8]) -> usize {
        self.log.push(CallRecord {
            opcode,
            input: input.to_vec(),
        });
        self.log.len() - 1
    }

    pub(crate) fn should_fail(&self, index: usize) -> bool {
        self.fail_at == Some(index)
    }

    pub fn calls(&self) -> &[CallRecord] {
        &self.log
    }

    pub fn clear_calls(&mut self) {
        self.log.clear();
        self.fail_at = None;
    }

    /// Rejects the `n`-th call from now (1-based).
    pub fn fail_on_call(&mut self, n: usize) {
        self.fail_at = Some(self.log.len() + n.max(1) - 1);
    }
}
