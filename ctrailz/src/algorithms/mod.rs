mod binary_tree;

use std::{
    fmt,
    str::FromStr,
    sync::{Arc, OnceLock},
};

use rand::{distributions::uniform::SampleUniform, Rng as _};
use serde::{Deserialize, Serialize};

use crate::{grid::Grid, maze::MazeError, registry::Registry};
pub use binary_tree::BinaryTree;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Registry of the carving algorithms.
pub type AlgorithmRegistry = Registry<dyn Algorithm, AlgorithmType>;

/// Uniformly distributed number in `[min, max)`.
///
/// Panics if the range is empty.
pub fn random_int<T>(rng: &mut Random, min: T, max: T) -> T
where
    T: SampleUniform + PartialOrd,
{
    rng.gen_range(min..max)
}

/// Maze carving strategy.
///
/// Gets a grid with no passages and carves passages into it, so that they form a spanning tree
/// (perfect maze). Implementors must not change the size of the grid and must not keep any state
/// between calls, one instance is shared by every maze using the same registry.
pub trait Algorithm: fmt::Debug + Send + Sync {
    fn process(&self, grid: &mut Grid, rng: &mut Random);
}

/// Identifier of an algorithm inside of the [`AlgorithmRegistry`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmType {
    #[default]
    BinaryTree,
}

impl AlgorithmType {
    pub const ALL: [AlgorithmType; 1] = [AlgorithmType::BinaryTree];

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmType::BinaryTree => "binary-tree",
        }
    }
}

impl fmt::Display for AlgorithmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmType {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|alg| alg.name() == normalized)
            .ok_or_else(|| MazeError::InvalidAlgorithmName(s.to_string()))
    }
}

/// Registry with every built-in algorithm, created once and shared.
pub fn default_registry() -> Arc<AlgorithmRegistry> {
    static REGISTRY: OnceLock<Arc<AlgorithmRegistry>> = OnceLock::new();

    REGISTRY
        .get_or_init(|| {
            let mut registry = AlgorithmRegistry::new();
            registry.register_default(AlgorithmType::BinaryTree, Arc::new(BinaryTree));
            Arc::new(registry)
        })
        .clone()
}
