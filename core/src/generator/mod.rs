use crate::*;
pub use random::*;

mod random;

/// Strategy seam for producing a mine layout from a config. Callers inject
/// the generator at board creation, which keeps placement deterministic in
/// tests without the engine knowing about seeds.
pub trait LayoutGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout>;
}
