use std::fs;
use std::path::Path;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::errors::DncError;
use crate::sorting::SortStrategy;

/// Settings of a profiling run. Every field is optional in YAML files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[serde(default)]
#[builder(default)]
pub struct ProfileConfig {
    /// Length of the random sequence handed to the sorters
    pub size: usize,

    /// Exclusive upper bound of the random sequence elements
    pub max_value: i64,

    /// Decimal digits of each Karatsuba operand
    pub digits: usize,

    /// Side of the random Strassen operands, must be a power of two
    pub matrix_size: usize,

    pub strategies: Vec<SortStrategy>,
    pub repetitions: usize,
    pub verify: bool
}

impl Default for ProfileConfig {
    fn default() -> Self {
        ProfileConfig {
            size: 10000,
            max_value: 1000,
            digits: 200,
            matrix_size: 64,
            strategies: SortStrategy::ALL.to_vec(),
            repetitions: 1,
            verify: false
        }
    }
}

impl ProfileConfig {
    pub fn load(path: &Path) -> Result<ProfileConfig, DncError> {
        let contents = fs::read_to_string(path)
            .map_err(|err| DncError::io_error(format!("Unable to read {}: {}", path.display(), err)))?;

        ProfileConfig::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<ProfileConfig, DncError> {
        let config: ProfileConfig = serde_yaml::from_str(contents)
            .map_err(|err| DncError::config_error(format!("Invalid profile configuration: {}", err)))?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DncError> {
        if self.max_value <= 0 {
            return Err(DncError::config_error(format!("max_value must be positive (got {})", self.max_value)));
        }

        if self.digits == 0 {
            return Err(DncError::config_error("digits must be at least 1".into()));
        }

        if !self.matrix_size.is_power_of_two() {
            return Err(
                DncError::config_error(format!("matrix_size must be a power of two (got {})", self.matrix_size))
                    .with_suggestions(vec!(format!("Try {}", self.matrix_size.next_power_of_two())))
            );
        }

        if self.repetitions == 0 {
            return Err(DncError::config_error("repetitions must be at least 1".into()));
        }

        Ok(())
    }
}

/*
                                                  ╒═════════╕
    ============================================= │  TESTS  │ =============================================
                                                  ╘═════════╛
*/
