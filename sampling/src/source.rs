use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_core::RngCore;

pub struct Source {
    source: ChaCha8Rng,
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    /// Returns a uniform value in `[0, 2^bits)`.
    #[inline(always)]
    pub fn next_bits(&mut self, bits: u32) -> u64 {
        if bits >= u64::BITS {
            self.next_u64()
        } else {
            self.next_u64() & ((1u64 << bits) - 1)
        }
    }

    /// Returns a uniform 256-bit word that is never all zeros.
    pub fn next_word_nonzero(&mut self) -> [u8; 32] {
        let mut word: [u8; 32] = [0u8; 32];
        loop {
            self.source.fill_bytes(&mut word);
            if word.iter().any(|b| *b != 0) {
                return word;
            }
        }
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}
