use fastbool::FastBoolGenerator;
use rand::RngCore;

/// Hands out a fixed sequence of words and counts how often it is asked.
struct Scripted {
    words: Vec<u64>,
    calls: usize,
}

impl Scripted {
    fn new(words: &[u64]) -> Self {
        Self {
            words: words.to_vec(),
            calls: 0,
        }
    }
}

impl RngCore for Scripted {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let word = self.words[self.calls % self.words.len()];
        self.calls += 1;
        word
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

#[test]
fn test_bits_come_out_lowest_first() {
    let mut coin = FastBoolGenerator::from_engine(Scripted::new(&[0b1101]));
    let first: Vec<bool> = coin.by_ref().take(5).collect();
    assert_eq!(first, [true, false, true, true, false]);
    assert_eq!(coin.buffered(), 59);
}

#[test]
fn test_one_word_per_64_draws() {
    let mut coin = FastBoolGenerator::from_engine(Scripted::new(&[u64::MAX, 0]));
    assert_eq!(coin.engine_mut().calls, 0);

    assert!(coin.by_ref().take(64).all(|b| b));
    assert_eq!(coin.engine_mut().calls, 1);
    assert_eq!(coin.buffered(), 0);

    assert!(!coin.next_bool());
    assert_eq!(coin.engine_mut().calls, 2);
    assert_eq!(coin.buffered(), 63);
}

#[test]
fn test_discard_buffer_draws_fresh_word() {
    let mut coin = FastBoolGenerator::from_engine(Scripted::new(&[u64::MAX, 0]));
    assert!(coin.next_bool());
    coin.discard_buffer();
    assert_eq!(coin.buffered(), 0);
    assert!(!coin.next_bool());
    assert_eq!(coin.into_engine().calls, 2);
}

#[test]
fn test_seeded_generators_agree() {
    let a: Vec<bool> = FastBoolGenerator::seed_from_u64(42).take(300).collect();
    let b: Vec<bool> = FastBoolGenerator::seed_from_u64(42).take(300).collect();
    let c: Vec<bool> = FastBoolGenerator::seed_from_u64(43).take(300).collect();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_roughly_balanced() {
    let trues = FastBoolGenerator::seed_from_u64(2024)
        .take(10_000)
        .filter(|&b| b)
        .count();
    assert!((4500..5500).contains(&trues), "got {trues} trues");
}

#[test]
fn test_os_seeded_generator_produces_both_values() {
    let draws: Vec<bool> = FastBoolGenerator::default().take(256).collect();
    assert!(draws.contains(&true));
    assert!(draws.contains(&false));
}
