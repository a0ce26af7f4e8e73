use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, thread_rng};
use rand_distr::{Distribution, Uniform};

use crate::Value;
use crate::error::BenchError;

// values are drawn from [0, DEFAULT_MAX_VALUE]
pub const DEFAULT_MAX_VALUE: Value = 10_000;

/// Ordering of a generated dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Random,
    Sorted,
    ReverseSorted,
}

impl Category {
    /// Reporting and plotting order.
    pub const ALL: [Category; 3] = [Category::Random, Category::Sorted, Category::ReverseSorted];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Random => "random",
            Category::Sorted => "sorted",
            Category::ReverseSorted => "reverse_sorted",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| BenchError::UnknownCategory(s.to_string()))
    }
}

/// The three orderings of one random draw.
#[derive(Clone, Debug)]
pub struct DatasetSet {
    pub size: usize,
    pub random: Vec<Value>,
    pub sorted: Vec<Value>,
    pub reverse_sorted: Vec<Value>,
}

impl DatasetSet {
    pub fn get(&self, category: Category) -> &[Value] {
        match category {
            Category::Random => &self.random,
            Category::Sorted => &self.sorted,
            Category::ReverseSorted => &self.reverse_sorted,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Value])> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

pub fn generate_uniform_with<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    min: Value,
    max: Value,
) -> Vec<Value> {
    let uniform = Uniform::new_inclusive(min, max);

    (0..count).map(|_| uniform.sample(rng)).collect()
}

/// Draws `size` values from `[0, max_value]` and derives the sorted and
/// reverse-sorted copies from the same draw.
pub fn generate_set_with<R: Rng + ?Sized>(rng: &mut R, size: usize, max_value: Value) -> DatasetSet {
    let random = generate_uniform_with(rng, size, 0, max_value);

    let mut sorted = random.clone();
    sorted.sort();

    let mut reverse_sorted = sorted.clone();
    reverse_sorted.reverse();

    DatasetSet {
        size,
        random,
        sorted,
        reverse_sorted,
    }
}

pub fn generate_set(size: usize, max_value: Value) -> DatasetSet {
    generate_set_with(&mut thread_rng(), size, max_value)
}

/// Seeded RNG when `seed` is given, entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
