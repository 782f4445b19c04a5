use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Fuente de azar del motor: barajar el pool y sortear la respuesta.
pub trait RandomSource {
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// Índice uniforme en `0..upper`. `upper` nunca es 0.
    fn random_index(&mut self, upper: usize) -> usize;
}

/// Adaptador sobre cualquier generador de `rand`.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<SmallRng> {
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    fn random_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

/// Fuente determinista para partidas reproducibles: no reordena nada y
/// devuelve los índices del guion en bucle.
#[derive(Debug, Clone)]
pub struct FixedSource {
    answers: Vec<usize>,
    next: usize,
}

impl FixedSource {
    pub fn new(answers: impl Into<Vec<usize>>) -> Self {
        let answers = answers.into();
        assert!(!answers.is_empty(), "FixedSource necesita al menos un índice");
        Self { answers, next: 0 }
    }

    /// Siempre la misma respuesta.
    pub fn always(answer: usize) -> Self {
        Self::new(vec![answer])
    }
}

impl RandomSource for FixedSource {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}

    fn random_index(&mut self, upper: usize) -> usize {
        let value = self.answers[self.next % self.answers.len()];
        self.next += 1;
        value % upper
    }
}
