use super::extraction_rule::capture;
use super::{ChunkStats, CompletedRun, ExtractionRule, HealthStats, MetricsRecord, TickTimes, TpsWindows, scan_errors};
use chrono::{Local, NaiveDateTime};

const LOG_TARGET: &str = " extractor";

/// Server ready marker, e.g. `Done (12.345s)! For help, type "help"`.
static STARTUP_TIME: ExtractionRule<f64> = ExtractionRule::new("startup_time", r"(?i)Done \((\d+\.?\d*)s\)", |caps| capture(caps, 1));

/// Spark TPS line; all five windows or nothing.
static TPS: ExtractionRule<[f64; 5]> = ExtractionRule::new(
    "tps",
    r"(?i)TPS from last.*?(\d+\.?\d*),\s*(\d+\.?\d*),\s*(\d+\.?\d*),\s*(\d+\.?\d*),\s*(\d+\.?\d*)",
    |caps| {
        Some([
            capture(caps, 1)?,
            capture(caps, 2)?,
            capture(caps, 3)?,
            capture(caps, 4)?,
            capture(caps, 5)?,
        ])
    },
);

static CPU_USAGE: ExtractionRule<(f64, f64)> = ExtractionRule::new(
    "cpu_usage",
    r"(?i)CPU Process:.*?(\d+\.?\d*)%.*?System:.*?(\d+\.?\d*)%",
    |caps| Some((capture(caps, 1)?, capture(caps, 2)?)),
);

static MEMORY_USAGE: ExtractionRule<(u64, u64)> = ExtractionRule::new(
    "memory_usage",
    r"(?i)Memory:.*?(\d+)\s*MB\s*/\s*(\d+)\s*MB",
    |caps| Some((capture(caps, 1)?, capture(caps, 2)?)),
);

/// Tick duration summary; may span several lines.
static TICK_DURATIONS: ExtractionRule<(f64, f64)> = ExtractionRule::new(
    "tick_durations",
    r"(?is)Tick durations.*?avg:?\s*(\d+\.?\d*)\s*ms.*?max:?\s*(\d+\.?\d*)\s*ms",
    |caps| Some((capture(caps, 1)?, capture(caps, 2)?)),
);

/// Start of the tick duration summary.
static TICK_SECTION: ExtractionRule<usize> =
    ExtractionRule::new("tick_section", r"(?i)Tick durations", |caps| caps.get(0).map(|m| m.start()));

/// First blank or whitespace-only line; ends a section.
static SECTION_END: ExtractionRule<usize> = ExtractionRule::new("section_end", r"\n[^\S\n]*\n", |caps| caps.get(0).map(|m| m.start()));

/// Minimum tick time, only searched within the tick duration summary.
static TICK_MIN: ExtractionRule<f64> = ExtractionRule::new("tick_min", r"(?i)\bmin:?\s*(\d+\.?\d*)\s*ms", |caps| capture(caps, 1));

static SPAWN_AREA: ExtractionRule<()> = ExtractionRule::new("spawn_area", r"(?i)Preparing spawn area", |_| Some(()));

/// Extract a metrics record from a transcript, stamped with the current local time.
///
/// `None` means the run produced no transcript and yields a `no_logs` record.
#[must_use]
pub fn extract(transcript: Option<&str>) -> MetricsRecord {
    extract_at(transcript, Local::now().naive_local())
}

/// Extract a metrics record from a transcript with an explicit timestamp.
///
/// For a given transcript the result depends on nothing but `timestamp`.
#[must_use]
pub fn extract_at(transcript: Option<&str>, timestamp: NaiveDateTime) -> MetricsRecord {
    let Some(text) = transcript else {
        log::debug!(target: LOG_TARGET, "No transcript available");
        return MetricsRecord::no_logs(timestamp);
    };

    log::debug!(target: LOG_TARGET, "Extracting metrics from {} byte transcript", text.len());

    let (cpu_process, cpu_system) = CPU_USAGE.find(text).unzip();
    let (memory_used_mb, memory_max_mb) = MEMORY_USAGE.find(text).unzip();
    let (avg_tick_ms, max_tick_ms) = TICK_DURATIONS.find(text).unzip();
    let errors = scan_errors(text);

    MetricsRecord::Completed(CompletedRun {
        timestamp,
        startup_time_s: STARTUP_TIME.find(text),
        tps: TPS.find(text).map(TpsWindows::from_array).unwrap_or_default(),
        health: HealthStats {
            cpu_process,
            cpu_system,
            memory_used_mb,
            memory_max_mb,
            gc_avg_ms: None,
        },
        tick_times: TickTimes {
            avg_tick_ms,
            max_tick_ms,
            min_tick_ms: tick_section(text).and_then(|section| TICK_MIN.find(section)),
        },
        chunks: ChunkStats {
            chunks_loaded: None,
            chunks_generated: SPAWN_AREA.count(text) as u64,
        },
        error_count: errors.len(),
        errors,
        score: None,
    })
}

/// The tick duration summary: from its header up to the next blank line.
fn tick_section(text: &str) -> Option<&str> {
    let section = text.get(TICK_SECTION.find(text)?..)?;
    Some(SECTION_END.find(section).and_then(|end| section.get(..end)).unwrap_or(section))
}
