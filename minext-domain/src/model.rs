use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("Dataset must contain at least one opinion (m = 0)")]
    NoOpinions,
    #[error("Total population n must be positive")]
    NonPositiveTotal,
    #[error("Field `{field}` has {found} values, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Row {row} of the cost matrix has {found} values, expected {expected}")]
    CostRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Field `{field}` contains a non-finite value at position {index}")]
    NonFinite { field: &'static str, index: usize },
    #[error("Total of `p` exceeds {max}", max = i64::MAX)]
    PopulationOverflow,
}

/// Unvalidated dataset fields, in the order they appear in an input file.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetInput {
    pub total_population: u64,
    pub opinion_count: usize,
    pub populations: Vec<u64>,
    pub extremism: Vec<f64>,
    pub activation_costs: Vec<f64>,
    pub transfer_costs: Vec<Vec<f64>>,
    pub max_cost: f64,
    pub max_movement: u64,
}

/// Dense `m x m` matrix of base per-person transfer costs.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferCost {
    size: usize,
    values: Vec<f64>,
}

impl TransferCost {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.values[from * self.size + to]
    }

    pub fn row(&self, from: usize) -> &[f64] {
        &self.values[from * self.size..(from + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks(self.size.max(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalCaps {
    /// Denominator of the congestion multiplier.
    pub total_population: u64,
    pub max_cost: f64,
    pub max_movement: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpinionBin {
    pub index: usize,
    pub population: u64,
    pub extremism: f64,
    pub activation_cost: f64,
}

impl OpinionBin {
    pub fn is_empty(&self) -> bool {
        self.population == 0
    }
}

/// A validated problem instance. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct OpinionDataset {
    populations: Vec<u64>,
    extremism: Vec<f64>,
    activation_costs: Vec<f64>,
    transfer_costs: TransferCost,
    caps: GlobalCaps,
}

impl TryFrom<DatasetInput> for OpinionDataset {
    type Error = DatasetError;

    fn try_from(input: DatasetInput) -> Result<Self, Self::Error> {
        Self::try_new(input)
    }
}

impl OpinionDataset {
    pub fn try_new(input: DatasetInput) -> Result<Self, DatasetError> {
        let DatasetInput {
            total_population,
            opinion_count: m,
            populations,
            extremism,
            activation_costs,
            transfer_costs,
            max_cost,
            max_movement,
        } = input;

        if m == 0 {
            return Err(DatasetError::NoOpinions);
        }
        if total_population == 0 {
            return Err(DatasetError::NonPositiveTotal);
        }

        check_len("p", m, populations.len())?;
        check_len("ext", m, extremism.len())?;
        check_len("cei", m, activation_costs.len())?;
        check_len("c", m, transfer_costs.len())?;
        if populations
            .iter()
            .try_fold(0_i64, |total, &population| {
                i64::try_from(population)
                    .ok()
                    .and_then(|population| total.checked_add(population))
            })
            .is_none()
        {
            return Err(DatasetError::PopulationOverflow);
        }
        check_finite("ext", &extremism)?;
        check_finite("cei", &activation_costs)?;
        if !max_cost.is_finite() {
            return Err(DatasetError::NonFinite {
                field: "ct",
                index: 0,
            });
        }

        let mut values = Vec::with_capacity(m * m);
        for (row_idx, row) in transfer_costs.into_iter().enumerate() {
            if row.len() != m {
                return Err(DatasetError::CostRowLength {
                    row: row_idx + 1,
                    expected: m,
                    found: row.len(),
                });
            }
            if let Some(col) = row.iter().position(|value| !value.is_finite()) {
                return Err(DatasetError::NonFinite {
                    field: "c",
                    index: row_idx * m + col,
                });
            }
            values.extend(row);
        }

        Ok(Self {
            populations,
            extremism,
            activation_costs,
            transfer_costs: TransferCost { size: m, values },
            caps: GlobalCaps {
                total_population,
                max_cost,
                max_movement,
            },
        })
    }

    pub fn opinion_count(&self) -> usize {
        self.populations.len()
    }

    pub fn total_population(&self) -> u64 {
        self.caps.total_population
    }

    pub fn populations(&self) -> &[u64] {
        &self.populations
    }

    pub fn extremism(&self) -> &[f64] {
        &self.extremism
    }

    pub fn activation_costs(&self) -> &[f64] {
        &self.activation_costs
    }

    pub fn transfer_costs(&self) -> &TransferCost {
        &self.transfer_costs
    }

    pub fn caps(&self) -> GlobalCaps {
        self.caps
    }

    pub fn bin(&self, index: usize) -> OpinionBin {
        OpinionBin {
            index,
            population: self.populations[index],
            extremism: self.extremism[index],
            activation_cost: self.activation_costs[index],
        }
    }

    pub fn bins(&self) -> impl Iterator<Item = OpinionBin> + '_ {
        (0..self.opinion_count()).map(|index| self.bin(index))
    }

    /// Weighted cost of moving one person from `from` to `to`.
    ///
    /// The base cost is scaled by the congestion multiplier `1 + p[from] / n`,
    /// and the activation cost of `to` is added when that bin currently holds
    /// nobody. Staying in the same bin is free.
    pub fn cost_coefficient(&self, from: usize, to: usize) -> f64 {
        if from == to {
            return 0.0;
        }
        let origin = self.bin(from);
        let destination = self.bin(to);
        let congestion = 1.0 + origin.population as f64 / self.caps.total_population as f64;
        let activation = if destination.is_empty() {
            destination.activation_cost
        } else {
            0.0
        };
        self.transfer_costs.get(from, to) * congestion + activation
    }

    /// Movement-budget weight of one person moved from `from` to `to`.
    pub fn distance(from: usize, to: usize) -> u64 {
        from.abs_diff(to) as u64
    }

    pub fn initial_extremism(&self) -> f64 {
        self.bins()
            .map(|bin| bin.population as f64 * bin.extremism)
            .sum()
    }
}

fn check_len(field: &'static str, expected: usize, found: usize) -> Result<(), DatasetError> {
    if expected == found {
        Ok(())
    } else {
        Err(DatasetError::LengthMismatch {
            field,
            expected,
            found,
        })
    }
}

fn check_finite(field: &'static str, values: &[f64]) -> Result<(), DatasetError> {
    match values.iter().position(|value| !value.is_finite()) {
        Some(index) => Err(DatasetError::NonFinite { field, index }),
        None => Ok(()),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: usize,
    pub to: usize,
    pub count: u64,
}

impl Transfer {
    /// `x[i][i]`: people counted against the supply of their own bin.
    pub fn is_kept(&self) -> bool {
        self.from == self.to
    }
}

/// Realized integer transfers between opinion bins, row = origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementPlan {
    size: usize,
    moves: Vec<u64>,
}

impl MovementPlan {
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            moves: vec![0; size * size],
        }
    }

    pub fn from_fn(size: usize, mut count: impl FnMut(usize, usize) -> u64) -> Self {
        let mut moves = Vec::with_capacity(size * size);
        for from in 0..size {
            for to in 0..size {
                moves.push(count(from, to));
            }
        }
        Self { size, moves }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.moves[from * self.size + to]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u64]> + '_ {
        self.moves.chunks(self.size.max(1))
    }

    /// Non-zero entries in row-major order, self-transfers included.
    pub fn transfers(&self) -> impl Iterator<Item = Transfer> + '_ {
        self.moves.iter().enumerate().filter_map(|(idx, &count)| {
            (count > 0).then(|| Transfer {
                from: idx / self.size,
                to: idx % self.size,
                count,
            })
        })
    }

    /// Everything taken from row `from`, `x[from][from]` included.
    pub fn supply_used(&self, from: usize) -> u64 {
        (0..self.size).fold(0_u64, |total, to| total.saturating_add(self.get(from, to)))
    }

    pub fn inflow(&self, to: usize) -> u64 {
        (0..self.size)
            .filter(|&from| from != to)
            .fold(0_u64, |total, from| total.saturating_add(self.get(from, to)))
    }

    pub fn outflow(&self, from: usize) -> u64 {
        (0..self.size)
            .filter(|&to| to != from)
            .fold(0_u64, |total, to| total.saturating_add(self.get(from, to)))
    }

    pub fn total_moved(&self) -> u64 {
        self.transfers()
            .filter(|transfer| !transfer.is_kept())
            .fold(0_u64, |total, transfer| total.saturating_add(transfer.count))
    }

    pub fn is_idle(&self) -> bool {
        self.total_moved() == 0
    }
}
