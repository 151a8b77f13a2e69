use malachite::Integer;
use rand::distributions::{Distribution, Uniform};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::ProfileConfig;
use crate::errors::DncError;
use crate::integer_ext::rand_with_digits;
use crate::inversions::{count_and_sort, count_inversions_naive};
use crate::karatsuba::karatsuba;
use crate::matrix::Matrix;
use crate::profiling::{profile, profiler_entries, ProfilerEntry};
use crate::sorting::sort;
use crate::strassen;

type Check = Box<dyn FnOnce() -> Option<String> + Send>;

#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    pub config: ProfileConfig,
    pub entries: Vec<ProfilerEntry>,
    pub mismatches: Vec<String>
}

impl ProfileReport {
    pub fn to_json(&self) -> Result<String, DncError> {
        serde_json::to_string_pretty(self).map_err(|err| DncError::io_error(format!("Unable to serialize report: {}", err)))
    }
}

/*
    ╒══════════════════╕
    │ Input generation │
    ╘══════════════════╛
*/

pub fn random_sequence(size: usize, max_value: i64) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    let distribution = Uniform::from(0..max_value);

    (0..size).map(|_| distribution.sample(&mut rng)).collect()
}

pub fn random_matrix(n: usize, max_value: i64) -> Matrix<i64> {
    let mut rng = rand::thread_rng();
    let distribution = Uniform::from(0..max_value);

    Matrix::from_fn(n, n, |_, _| distribution.sample(&mut rng))
}

/*
    ╒═════════════╕
    │ Timing runs │
    ╘═════════════╛
*/

/// Times every algorithm on fresh random inputs. Spans are accumulated in the global profiler.
/// When `verify` is set, results are compared against their oracles and every mismatch is
/// returned as a message.
pub fn run(config: &ProfileConfig) -> Result<Vec<String>, DncError> {
    config.validate()?;

    let mut checks: Vec<Check> = vec!();

    for _ in 0..config.repetitions {
        let seq = random_sequence(config.size, config.max_value);

        for strategy in &config.strategies {
            let sorted = profile(strategy.name(), || sort(*strategy, &seq));

            if config.verify {
                let input = seq.clone();
                let name = strategy.name();

                checks.push(Box::new(move || {
                    let mut expected = input;
                    expected.sort();

                    (sorted != expected).then(|| format!("{} sort differs from the reference sort", name))
                }));
            }
        }

        let (sorted, count) = profile("inversions", || count_and_sort(&seq));

        if config.verify {
            checks.push(Box::new(move || {
                let expected = count_inversions_naive(&seq);

                if count != expected {
                    Some(format!("Inversion count {} differs from brute force count {}", count, expected))

                } else if sorted.windows(2).any(|w| w[0] > w[1]) {
                    Some("Inversion counter returned an unsorted sequence".into())

                } else {
                    None
                }
            }));
        }

        let x = rand_with_digits(config.digits, false);
        let y = rand_with_digits(config.digits, false);
        let product = profile("karatsuba", || karatsuba(&x, &y));

        if config.verify {
            checks.push(Box::new(move || {
                let expected: Integer = &x * &y;
                (product != expected).then(|| format!("Karatsuba product of {} and {} is {}, expected {}", x, y, product, expected))
            }));
        }

        let a = random_matrix(config.matrix_size, config.max_value);
        let b = random_matrix(config.matrix_size, config.max_value);
        let product = profile("strassen", || strassen::multiply(&a, &b))?;

        if config.verify {
            checks.push(Box::new(move || {
                match a.naive_mul(&b) {
                    Ok(expected) if expected == product => None,
                    Ok(_) => Some(format!("Strassen product of two {}x{} matrices differs from the naive product", a.nrows(), a.ncols())),
                    Err(err) => Some(err.to_string())
                }
            }));
        }
    }

    Ok(checks.into_par_iter().filter_map(|check| check()).collect())
}

/// Runs the profile and bundles the profiler contents with any verification mismatches.
pub fn run_report(config: &ProfileConfig) -> Result<ProfileReport, DncError> {
    let mismatches = run(config)?;

    Ok(ProfileReport { config: config.clone(), entries: profiler_entries(), mismatches })
}

/*
                                                  ╒═════════╕
    ============================================= │  TESTS  │ =============================================
                                                  ╘═════════╛
*/

#[cfg(test)]
mod tests {
    use crate::config::{ProfileConfig, ProfileConfigBuilder};
    use crate::errors::ErrorKind;
    use crate::harness::*;

    fn small_config() -> ProfileConfig {
        ProfileConfigBuilder::default()
            .size(300)
            .max_value(50)
            .digits(40)
            .matrix_size(8)
            .repetitions(2)
            .verify(true)
            .build()
            .unwrap()
    }

    #[test]
    fn verified_run_has_no_mismatches() {
        assert_eq!(run(&small_config()).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn report_lists_every_algorithm() {
        let report = run_report(&small_config()).unwrap();
        let names = report.entries.iter().map(|i| i.name).collect::<Vec<_>>();

        for name in ["selection", "selection-recursive", "merge", "inversions", "karatsuba", "strassen"] {
            assert!(names.contains(&name));
        }

        let json = report.to_json().unwrap();
        assert!(json.contains("\"mismatches\": []"));
    }

    #[test]
    fn random_inputs_respect_bounds() {
        let seq = random_sequence(1000, 7);
        assert_eq!(seq.len(), 1000);
        assert!(seq.iter().all(|i| (0..7).contains(i)));

        let m = random_matrix(4, 3);
        assert_eq!((m.nrows(), m.ncols()), (4, 4));
        assert!(m.as_slice().iter().all(|i| (0..3).contains(i)));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = small_config();
        config.matrix_size = 6;

        assert_eq!(run(&config).unwrap_err().kind, ErrorKind::Config);
    }
}
