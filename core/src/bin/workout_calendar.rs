use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::{FixedOffset, Utc};
use clap::{Parser, Subcommand, ValueHint};
use workout_calendar_core::timestamp::format_timestamp;
use workout_calendar_core::{
    day_key, load_config, CalendarCell, CalendarDate, CalendarState, MarkerKind, ViewerConfig,
    WorkoutDetail, WorkoutRecord, WorkoutSnapshot, YearMonth,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Workout calendar viewer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the month grid and the workouts of the selected day
    Month(MonthArgs),
    /// Print heart-rate, speed and route summaries for one workout
    Detail(DetailArgs),
}

#[derive(Parser, Debug)]
struct CommonArgs {
    /// Directory with list_workouts.json, metadata.json and diagram_data.json
    #[arg(long, value_hint = ValueHint::DirPath)]
    data: PathBuf,

    /// Viewer config (JSON); defaults are used when absent
    #[arg(long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Local UTC offset, e.g. +03:00 (overrides the config)
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<String>,
}

#[derive(Parser, Debug)]
struct MonthArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Month to show (YYYY-MM); defaults to the current month
    #[arg(long)]
    month: Option<YearMonth>,

    /// Day to select (YYYY-MM-DD); moves to its month when needed
    #[arg(long)]
    select: Option<CalendarDate>,
}

#[derive(Parser, Debug)]
struct DetailArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Workout id (workoutKey)
    id: String,
}

fn parse_offset_minutes(raw: &str) -> Result<i32> {
    let (sign, rest) = match raw.as_bytes().first() {
        Some(b'+') => (1, &raw[1..]),
        Some(b'-') => (-1, &raw[1..]),
        _ => (1, raw),
    };
    let (h, m) = rest.split_once(':').unwrap_or((rest, "0"));
    // digits only: u32's FromStr would let a second '+' through
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !digits(h) || !digits(m) {
        return Err(anyhow!("offset {raw:?} is not [+-]HH[:MM]"));
    }
    let hours: u32 = h.parse().with_context(|| format!("bad offset hours in {raw:?}"))?;
    let minutes: u32 = m.parse().with_context(|| format!("bad offset minutes in {raw:?}"))?;
    if hours > 23 || minutes > 59 {
        return Err(anyhow!("offset {raw:?} out of range"));
    }
    // bounded above, so this fits
    Ok(sign * (hours * 60 + minutes) as i32)
}

fn resolve_config(common: &CommonArgs) -> Result<ViewerConfig> {
    let mut config = match &common.config {
        Some(path) => load_config(path).with_context(|| format!("loading {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    if let Some(raw) = &common.offset {
        config.utc_offset_minutes = parse_offset_minutes(raw)?;
    }
    Ok(config)
}

fn load_snapshot(common: &CommonArgs) -> Result<WorkoutSnapshot> {
    WorkoutSnapshot::load_dir(&common.data)
        .with_context(|| format!("loading workouts from {}", common.data.display()))
}

fn render_cell(cell: &CalendarCell) -> String {
    let mark = if cell.has_workouts { '*' } else { ' ' };
    let day = if cell.is_current_month {
        format!("{:>2}", cell.date.day())
    } else {
        " .".to_string()
    };
    match (cell.is_selected, cell.is_today) {
        (true, _) => format!("[{day}]{mark}"),
        (false, true) => format!("<{day}>{mark}"),
        (false, false) => format!(" {day} {mark}"),
    }
}

fn run_month(args: MonthArgs) -> Result<()> {
    let config = resolve_config(&args.common)?;
    let tz = config.time_zone();
    let snapshot = load_snapshot(&args.common)?;
    let index = snapshot.group_by_day(&tz);

    let today = day_key(&Utc::now().with_timezone(&tz));
    let mut state = match args.month {
        Some(month) => CalendarState::new(month),
        None => CalendarState::starting_at(today),
    };
    if let Some(date) = args.select {
        state = state.select(date);
    }

    let grid = state.grid(&index, today, config.first_weekday);
    println!("{}", grid.title());
    let header: Vec<String> = grid
        .weekday_headers()
        .iter()
        .map(|w| format!(" {:<4}", &format!("{w:?}")[..2]))
        .collect();
    println!("{}", header.concat());
    for week in grid.weeks() {
        let row: Vec<String> = week.iter().map(render_cell).collect();
        println!("{}", row.concat());
    }

    if let Some(day) = state.selected {
        println!();
        println!("Workouts on {day}:");
        let listed: Vec<_> = state
            .selected_workouts(&index)
            .iter()
            .filter(|w| config.accepts_activity(&w.activity_type))
            .collect();
        if listed.is_empty() {
            println!("  (none)");
        }
        for w in listed {
            println!("  {}  {:<16} {}", w.id, w.activity_type, w.start_timestamp);
        }
    }

    if !index.unparsed_ids().is_empty() {
        log::warn!(
            "{} workouts have unreadable start dates: {:?}",
            index.unparsed_ids().len(),
            index.unparsed_ids()
        );
    }
    Ok(())
}

fn calendar_line(record: &WorkoutRecord, tz: &FixedOffset) -> String {
    match record.start_instant(tz) {
        Ok(start) => format!(
            "on the calendar at {} (starts {} UTC)",
            day_key(&start),
            format_timestamp(&start.with_timezone(&Utc))
        ),
        Err(err) => format!("not on the calendar: {err}"),
    }
}

fn run_detail(args: DetailArgs) -> Result<()> {
    let tz = resolve_config(&args.common)?.time_zone();
    let snapshot = load_snapshot(&args.common)?;
    let record = snapshot
        .workout(&args.id)
        .ok_or_else(|| anyhow!("no workout with id {:?}", args.id))?;
    let detail = WorkoutDetail::derive(
        record,
        snapshot.metadata_for(&args.id),
        snapshot.samples_for(&args.id),
    );

    println!("{} ({})  {}", detail.workout_id, detail.activity_type, detail.start_timestamp);
    println!("  {}", calendar_line(record, &tz));
    if let Some(meta) = &detail.metadata {
        println!(
            "  distance {:.2} km, duration {}",
            meta.distance_km(),
            meta.formatted_duration()
        );
        if let (Some(t), Some(h)) = (meta.avg_temp_celsius(), meta.avg_humidity_percent()) {
            println!("  avg temp {t:.1} °C, humidity {h:.0} %");
        }
        if let Some(comment) = &meta.comment {
            println!("  \"{comment}\"");
        }
    }
    let hr = detail.heart_rate;
    println!("  heart rate  min {} / avg {} / max {} bpm", hr.min, hr.mean, hr.max);
    let sp = detail.speed;
    println!(
        "  speed       min {:.1} / avg {:.1} / max {:.1} km/h",
        sp.min, sp.mean, sp.max
    );
    let r = detail.region;
    println!(
        "  region      center ({:.4}, {:.4}) span {:.4} x {:.4}",
        r.center_lat, r.center_lon, r.lat_span, r.lon_span
    );
    for m in &detail.markers {
        let label = match m.kind {
            MarkerKind::Start => "start",
            MarkerKind::Finish => "finish",
        };
        println!(
            "  {label:<6}      ({:.4}, {:.4})",
            m.coordinate.latitude, m.coordinate.longitude
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Month(args) => run_month(args),
        Command::Detail(args) => run_detail(args),
    }
}
