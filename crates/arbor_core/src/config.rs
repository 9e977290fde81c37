//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! a `config.toml` file. Every section has defaults, so a file only needs to
//! name the values it overrides.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 120
//! height = 80
//! seed = 42
//!
//! [genome]
//! starting_genome = [2, 7, 2, 0, 2, 0, 2, 0]
//! mutation_rate = 0.3
//!
//! [light.policy]
//! kind = "Graduated"
//!
//! [reproduction.cost]
//! kind = "ChildEndowment"
//! endowment = 2.0
//! ```

use serde::{Deserialize, Serialize};

/// World-level configuration: grid dimensions, seeding and logging cadence.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u16,
    pub height: u16,
    pub seed: Option<u64>,
    /// Plants placed at start-up and after every extinction.
    pub initial_plants: usize,
    /// Random positions tried per plant before placement is skipped.
    pub placement_attempts: usize,
    /// Ticks between metric summaries in the log.
    pub log_interval: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 120,
            height: 80,
            seed: None,
            initial_plants: 12,
            placement_attempts: 64,
            log_interval: 1000,
        }
    }
}

/// How the mutation operator picks the gene to modify.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TipBias {
    /// Maximum of two uniform draws, favouring genes near the tips.
    #[default]
    MaxOfTwo,
    Uniform,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GenomeConfig {
    pub starting_genome: Vec<u8>,
    pub mutation_rate: f64,
    pub tip_bias: TipBias,
    /// Never mutate the root gene.
    pub protect_root: bool,
}

impl Default for GenomeConfig {
    fn default() -> Self {
        Self {
            starting_genome: vec![
                0b010, 0b111, 0b010, 0b000, 0b010, 0b000, 0b010, 0b000,
            ],
            mutation_rate: 0.3,
            tip_bias: TipBias::MaxOfTwo,
            protect_root: true,
        }
    }
}

/// Facing and rotation convention used when placing new cells.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacingRule {
    /// Children inherit their parent's facing; a north-facing seed never
    /// grows downwards.
    #[default]
    Upright,
    /// Children face the direction they grew in (bird's-eye view).
    Turtle,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct GrowthConfig {
    pub facing: FacingRule,
}

/// Which cells may absorb light and how much a capture is worth.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "kind")]
pub enum AbsorptionPolicy {
    /// Cells with at least `min_open` empty cardinal neighbours capture one quantum.
    Simple { min_open: u8 },
    /// One, two, or three-plus open sides capture 0.5, 1.0 or 1.5 quanta.
    Graduated,
}

impl Default for AbsorptionPolicy {
    fn default() -> Self {
        AbsorptionPolicy::Simple { min_open: 3 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LightConfig {
    pub absorption_probability: f64,
    pub policy: AbsorptionPolicy,
    /// Base energy carried by one particle.
    pub quantum: f64,
    pub cooldown_ticks: u32,
    /// Ticks a new particle waits before its first move.
    pub pause_ticks: u32,
    /// Extra energy per traversed link, as a fraction of the quantum.
    pub distance_scale: f64,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            absorption_probability: 0.25,
            policy: AbsorptionPolicy::default(),
            quantum: 1.0,
            cooldown_ticks: 4,
            pause_ticks: 0,
            distance_scale: 0.0,
        }
    }
}

/// Energy a parent spends when a seed is released.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "kind")]
pub enum ReproductionCost {
    /// One unit per child gene.
    ChildLength,
    Flat { amount: f64 },
    /// Child length plus a starting-energy gift carried by the seed.
    ChildEndowment { endowment: f64 },
}

impl Default for ReproductionCost {
    fn default() -> Self {
        ReproductionCost::ChildLength
    }
}

impl ReproductionCost {
    /// Cost of releasing a child with `child_len` genes.
    pub fn cost(&self, child_len: usize) -> f64 {
        match *self {
            ReproductionCost::ChildLength => child_len as f64,
            ReproductionCost::Flat { amount } => amount,
            ReproductionCost::ChildEndowment { endowment } => child_len as f64 + endowment,
        }
    }

    /// Starting energy the seed carries to its new plant.
    pub fn endowment(&self) -> f64 {
        match *self {
            ReproductionCost::ChildEndowment { endowment } => endowment,
            _ => 0.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ReproductionConfig {
    pub cost: ReproductionCost,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DispersalConfig {
    pub airborne_steps: u32,
    /// Radius that must be empty around a landing seed.
    pub germination_radius: u16,
}

impl Default for DispersalConfig {
    fn default() -> Self {
        Self {
            airborne_steps: 12,
            germination_radius: 2,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Lifespan granted per gene in the genome.
    pub max_age_per_gene: u64,
    pub starvation_ticks: u64,
    /// Energy a freshly placed or germinated plant starts with.
    pub initial_energy: f64,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            max_age_per_gene: 40,
            starvation_ticks: 60,
            initial_energy: 0.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SimConfig {
    pub world: WorldConfig,
    pub genome: GenomeConfig,
    pub growth: GrowthConfig,
    pub light: LightConfig,
    pub reproduction: ReproductionConfig,
    pub dispersal: DispersalConfig,
    pub lifecycle: LifecycleConfig,
}

impl SimConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.world.width > 0, "World width must be positive");
        anyhow::ensure!(self.world.height > 0, "World height must be positive");
        anyhow::ensure!(
            self.world.width <= 4096 && self.world.height <= 4096,
            "World dimensions too large (max 4096)"
        );
        anyhow::ensure!(
            self.world.log_interval > 0,
            "Log interval must be positive"
        );

        anyhow::ensure!(
            crate::genome::is_well_formed(&self.genome.starting_genome),
            "Starting genome is not a well-formed gene tree"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.genome.mutation_rate),
            "Mutation rate must be in [0.0, 1.0]"
        );

        anyhow::ensure!(
            (0.0..=1.0).contains(&self.light.absorption_probability),
            "Absorption probability must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.light.quantum > 0.0,
            "Light quantum must be positive"
        );
        anyhow::ensure!(
            self.light.distance_scale >= 0.0,
            "Distance scale must be non-negative"
        );
        if let AbsorptionPolicy::Simple { min_open } = self.light.policy {
            anyhow::ensure!(min_open <= 4, "Absorption threshold must be in [0, 4]");
        }

        match self.reproduction.cost {
            ReproductionCost::ChildLength => {}
            ReproductionCost::Flat { amount } => {
                anyhow::ensure!(amount >= 0.0, "Flat reproduction cost must be non-negative")
            }
            ReproductionCost::ChildEndowment { endowment } => anyhow::ensure!(
                endowment >= 0.0,
                "Child endowment must be non-negative"
            ),
        }

        anyhow::ensure!(
            self.dispersal.germination_radius >= 1,
            "Germination radius must be at least 1"
        );

        anyhow::ensure!(
            self.lifecycle.max_age_per_gene > 0,
            "Max age per gene must be positive"
        );
        anyhow::ensure!(
            self.lifecycle.starvation_ticks > 0,
            "Starvation threshold must be positive"
        );
        anyhow::ensure!(
            self.lifecycle.initial_energy >= 0.0,
            "Initial energy must be non-negative"
        );

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Hash of every parameter that influences simulation behaviour.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.genome).as_bytes());
        hasher.update(format!("{:?}", self.growth).as_bytes());
        hasher.update(format!("{:?}", self.light).as_bytes());
        hasher.update(format!("{:?}", self.reproduction).as_bytes());
        hasher.update(format!("{:?}", self.dispersal).as_bytes());
        hasher.update(format!("{:?}", self.lifecycle).as_bytes());
        hex::encode(hasher.finalize())
    }
}
