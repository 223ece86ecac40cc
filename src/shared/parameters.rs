//! The structs used for specifying the parameters of the simulation.
//! The basic timestep is two hours: all rates and durations are given in
//! units of 2 h.
use crate::affinity::AffinityTransform;
use crate::kinetics::AntibodyKinetics;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const TIMESTEPS_PER_DAY: usize = 12;
// length of the V heavy + V light region (amino-acids)
pub const ANTIBODY_LENGTH: usize = 220;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Parameters {
    pub schedule: ScheduleParameters,
    pub germinal_center: GerminalCenterParameters,
    pub dynamics: DynamicsParameters,
    pub binding: BindingParameters,
    pub mutation: MutationParameters,
    pub antibody: AntibodyParameters,
}

/// Timeframe and infection schedule
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ScheduleParameters {
    pub endtime: usize,
    // timestep of every infection, and the fraction of the maximum dose
    // given at that time
    pub infection_times: Vec<usize>,
    pub doses: Vec<f64>,
    // decay constant of the antigen (exponential decay)
    pub antigen_decay: f64,
    // base meeting probability per free B cell and timestep
    pub p_base: f64,
}

/// Form and size of the germinal centers
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GerminalCenterParameters {
    pub t_max: usize, // GCs stay at maximum size until t_max
    pub lf_decay: f64, // decay constant of the limiting factors after t_max
    pub nb_gcs: usize,
    pub nb_lfs: usize, // limiting factors per GC
    pub naive_pool_per_gc: usize,
    pub memory_pool_per_gc: usize, // initial unspecific memory cells
}

/// Time dynamics of the cells and fate decisions
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DynamicsParameters {
    pub t_migration: usize, // between activation and GC entry
    pub t_aid: usize,       // between GC entry and the onset of mutations
    pub t_help: usize,      // to receive enough survival signals
    pub t_div: usize,
    pub t_diff: usize, // differentiation and exit
    pub t_life_gc: usize, // maximum survival time in the waiting area
    pub t_life_naive: usize,
    pub t_secret: usize, // before a plasma cell starts producing antibodies
    pub recycle: f64,    // fraction of selected cells that divide and recycle
    pub pc_export: f64,  // fraction of exiting cells that become plasma cells
}

/// Antibody/antigen binding model
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BindingParameters {
    pub n_key: usize, // length of the antibody hot spot (amino-acids)
    // minimum normalised binding energy for participation
    pub thr: f64,
    // maximum binding energy of newly produced cells (not enforced by the
    // affinity transform)
    pub upper_limit: f64,
    pub e_low: f64,  // kT, lower detection limit (K_D = 10^-5 mol/l)
    pub e_high: f64, // kT, higher detection limit (K_D = 10^-9 mol/l)
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct MutationParameters {
    pub p_err_fwr: f64, // error probability per codon and division, non-key part
    pub p_err_cdr: f64, // error probability per codon and division, key part
    pub p_death_fwr: f64, // a replacement mutation in the FWR is lethal
    pub p_block_fwr: f64, // a non-lethal FWR mutation blocks affinity maturation
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivationMode {
    Uniform,
    #[default]
    Affinity,
}

/// Kinetic model and antibody feedback
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AntibodyParameters {
    pub activation_mode: ActivationMode,
    pub secretion_rate: f64, // mol secreted by one plasma cell per timestep
    pub blood_volume: f64,   // l
    pub pc_lifespan: usize,  // average short-lived plasma cell lifespan
    pub half_life: f64,      // pharmacological half-life of IgG
}

impl Default for ScheduleParameters {
    fn default() -> ScheduleParameters {
        ScheduleParameters {
            endtime: 30 * TIMESTEPS_PER_DAY,
            infection_times: vec![0],
            doses: vec![1.],
            antigen_decay: (2 * TIMESTEPS_PER_DAY) as f64,
            p_base: 0.005,
        }
    }
}

impl Default for GerminalCenterParameters {
    fn default() -> GerminalCenterParameters {
        GerminalCenterParameters {
            t_max: 7 * TIMESTEPS_PER_DAY,
            lf_decay: (10 * TIMESTEPS_PER_DAY) as f64,
            nb_gcs: 1,
            nb_lfs: 25,
            naive_pool_per_gc: 1000,
            memory_pool_per_gc: 100,
        }
    }
}

impl Default for DynamicsParameters {
    fn default() -> DynamicsParameters {
        DynamicsParameters {
            t_migration: 3 * TIMESTEPS_PER_DAY,
            t_aid: 3 * TIMESTEPS_PER_DAY,
            t_help: 1,
            t_div: 4,
            t_diff: 4,
            t_life_gc: 4,
            t_life_naive: 14 * TIMESTEPS_PER_DAY,
            t_secret: 1,
            recycle: 0.9,
            pc_export: 0.5,
        }
    }
}

impl Default for BindingParameters {
    fn default() -> BindingParameters {
        BindingParameters {
            n_key: 10,
            thr: 0.6,
            upper_limit: 1.,
            e_low: -11.5,
            e_high: -20.7,
        }
    }
}

impl Default for MutationParameters {
    fn default() -> MutationParameters {
        MutationParameters {
            p_err_fwr: 0.003,
            p_err_cdr: 0.003,
            p_death_fwr: 0.5,
            p_block_fwr: 0.55,
        }
    }
}

impl Default for AntibodyParameters {
    fn default() -> AntibodyParameters {
        AntibodyParameters {
            activation_mode: ActivationMode::Affinity,
            secretion_rate: 2.1e-17 * 2.,
            blood_volume: 5.,
            pc_lifespan: 30 * TIMESTEPS_PER_DAY,
            half_life: 20.0 / 2.,
        }
    }
}

impl GerminalCenterParameters {
    pub fn naive_pool(&self) -> usize {
        self.naive_pool_per_gc * self.nb_gcs
    }

    pub fn memory_pool(&self) -> usize {
        self.memory_pool_per_gc * self.nb_gcs
    }
}

impl BindingParameters {
    /// Length of the antigen epitope, same as the antibody hot spot
    pub fn epitope_length(&self) -> usize {
        self.n_key
    }

    /// Length of the non-key part of the antibody
    pub fn framework_length(&self) -> usize {
        ANTIBODY_LENGTH.saturating_sub(self.n_key)
    }
}

fn check_probability(p: f64, name: &str) -> Result<()> {
    if !(0. ..=1.).contains(&p) {
        return Err(anyhow!(
            "Invalid parameter {}: {} is not a probability",
            name,
            p
        ));
    }
    Ok(())
}

impl Parameters {
    pub fn from_json(s: &str) -> Result<Parameters> {
        let params: Parameters = serde_json::from_str(s)
            .map_err(|e| anyhow!("Error when reading the parameters: {}", e))?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load the parameters from a json file. Missing fields take their
    /// default value.
    pub fn load_from_file(path: &Path) -> Result<Parameters> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Unable to open file {}: {}", path.display(), e))?;
        let params = Parameters::from_json(&content)?;
        log::info!("Loaded parameters from {}", path.display());
        Ok(params)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)
            .map_err(|e| anyhow!("Unable to write file {}: {}", path.display(), e))?;
        Ok(())
    }

    /// Check the consistency of the parameters. Any error here is fatal
    /// and must be reported before the simulation starts.
    pub fn validate(&self) -> Result<()> {
        let sch = &self.schedule;
        if sch.infection_times.len() != sch.doses.len() {
            return Err(anyhow!(
                "Invalid schedule: {} infection times but {} doses",
                sch.infection_times.len(),
                sch.doses.len()
            ));
        }
        for &dose in &sch.doses {
            check_probability(dose, "dose")?;
        }
        if sch.infection_times.iter().any(|&t| t > sch.endtime) {
            log::warn!("Some infections happen after the end of the simulation");
        }
        if !(sch.antigen_decay > 0.) {
            return Err(anyhow!("Invalid antigen decay: {}", sch.antigen_decay));
        }
        check_probability(sch.p_base, "p_base")?;

        let gc = &self.germinal_center;
        if gc.nb_gcs == 0 {
            return Err(anyhow!("Invalid number of germinal centers: 0"));
        }
        if !(gc.lf_decay > 0.) {
            return Err(anyhow!("Invalid limiting factor decay: {}", gc.lf_decay));
        }

        check_probability(self.dynamics.recycle, "recycle")?;
        check_probability(self.dynamics.pc_export, "pc_export")?;

        let bd = &self.binding;
        if bd.n_key == 0 || bd.n_key > ANTIBODY_LENGTH {
            return Err(anyhow!(
                "Invalid hot spot length {} (antibody length: {})",
                bd.n_key,
                ANTIBODY_LENGTH
            ));
        }
        if !(bd.thr < 1.) {
            return Err(anyhow!(
                "Invalid participation threshold {}: must be below 1",
                bd.thr
            ));
        }
        if !(bd.upper_limit > bd.thr) {
            return Err(anyhow!(
                "Invalid upper limit {}: must be above the threshold {}",
                bd.upper_limit,
                bd.thr
            ));
        }
        if !(bd.e_high < bd.e_low) {
            // K_D would not decrease with the binding energy
            return Err(anyhow!(
                "Invalid energies: e_high ({}) must be below e_low ({})",
                bd.e_high,
                bd.e_low
            ));
        }
        self.affinity_transform()?;

        let mt = &self.mutation;
        check_probability(mt.p_err_fwr, "p_err_fwr")?;
        check_probability(mt.p_err_cdr, "p_err_cdr")?;
        check_probability(mt.p_death_fwr, "p_death_fwr")?;
        check_probability(mt.p_block_fwr, "p_block_fwr")?;

        self.antibody_kinetics()?;
        Ok(())
    }

    pub fn affinity_transform(&self) -> Result<AffinityTransform> {
        AffinityTransform::new(self.binding.thr, self.binding.e_low, self.binding.e_high)
    }

    pub fn antibody_kinetics(&self) -> Result<AntibodyKinetics> {
        AntibodyKinetics::new(
            self.antibody.secretion_rate,
            self.antibody.half_life,
            self.antibody.blood_volume,
        )
    }
}
