use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use rustc_hash::FxHashMap;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

lazy_static! {
    pub static ref PROFILER: Mutex<FxHashMap<&'static str, (u128, usize)>> = Mutex::default();
}

fn profiler() -> MutexGuard<'static, FxHashMap<&'static str, (u128, usize)>> {
    PROFILER.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Wall clock span accumulated under `name` when it ends.
pub struct ProfSpan {
    name: &'static str,
    start: Instant
}

impl ProfSpan {
    pub fn new(name: &'static str) -> Self {
        ProfSpan { start: Instant::now(), name }
    }

    pub fn end(&self) {
        let mut p_entry = profiler();
        let entry_data = p_entry.entry(self.name).or_insert((0, 0));

        entry_data.0 += self.start.elapsed().as_nanos();
        entry_data.1 += 1;
    }
}

/// Runs `f` inside a span named `name`.
pub fn profile<T, F: FnOnce() -> T>(name: &'static str, f: F) -> T {
    let span = ProfSpan::new(name);
    let res = f();
    span.end();

    res
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProfilerEntry {
    pub name: &'static str,
    pub total_ms: u128,
    pub mean_us: u128,
    pub count: usize,
    #[tabled(display_with = "display_percentage")]
    pub percentage: f32
}

fn display_percentage(p: &f32) -> String {
    format!("{:.2}%", p)
}

pub fn clear_profiler() {
    profiler().clear();
}

/// Profiler contents sorted by total time, slowest first.
pub fn profiler_entries() -> Vec<ProfilerEntry> {
    let mut entries = profiler().iter().map(|(a, b)| (*a, *b)).collect::<Vec<_>>();
    entries.sort_by_key(|(_, i)| *i);
    entries.reverse();

    let total_time = entries.iter().map(|(_, (i, _))| *i).sum::<u128>().max(1);

    entries.into_iter().map(|(name, (time, count))| ProfilerEntry {
        name,
        total_ms: time / 1_000_000,
        mean_us: time / count.max(1) as u128 / 1000,
        count,
        percentage: (time as f64 / total_time as f64 * 100.0) as f32,
    }).collect()
}

pub fn profiler_table() -> String {
    Table::new(profiler_entries()).with(Style::modern_rounded()).to_string()
}

pub fn print_profiler_results() {
    println!("{}", profiler_table());
}

/*
                                                  ╒═════════╕
    ============================================= │  TESTS  │ =============================================
                                                  ╘═════════╛
*/
