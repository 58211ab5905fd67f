use std::fs::File;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use hand_geometry::{
    batch::{batch_distances, par_batch_distances},
    geometry::{angle, cross, distance, dot, normalize, Point3},
    gesture::{
        classify, classify_pose, is_fist_with, is_palm_open_with, is_pinch_with, Gesture,
        GestureThresholds, HandPose, LandmarkSet,
    },
    io::{read_landmarks_csv, read_points_csv, read_thresholds_json, write_thresholds_json},
};
use hand_telemetry::{cpu_temperature, CpuMonitor, MemorySnapshot, ProcPaths, UNAVAILABLE};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

fn init_logging() {
    if let Ok(path) = std::env::var("HAND_GEOMETRY_LOG") {
        match File::create(&path) {
            Ok(file) => {
                env_logger::Builder::from_default_env()
                    .target(env_logger::Target::Pipe(Box::new(file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Failed to create log file {}: {}", path, e);
                env_logger::Builder::from_default_env().init();
            }
        }
    } else {
        env_logger::Builder::from_default_env().init();
    }
}

/// Reports a failure on stderr and exits with a non-zero status.
fn fail(msg: String) -> ! {
    eprintln!("{}", msg);
    std::process::exit(1);
}

fn print_point(label: &str, p: Point3) {
    println!("{}: {:.6},{:.6},{:.6}", label, p.x, p.y, p.z);
}

fn format_reading(value: f64, unit: &str) -> String {
    if value == UNAVAILABLE {
        "unavailable".to_string()
    } else {
        format!("{:.1}{}", value, unit)
    }
}

fn random_cloud(rng: &mut ChaCha8Rng, n: usize) -> Vec<Point3> {
    (0..n)
        .map(|_| Point3::new(rng.gen(), rng.gen(), rng.gen()))
        .collect()
}

#[derive(Serialize)]
struct ClassifyReport {
    gesture: Gesture,
    pose: HandPose,
    pinch_distance: f64,
    fingers_extended: [bool; 5],
}

impl ClassifyReport {
    fn new(hand: &LandmarkSet, thresholds: &GestureThresholds) -> Self {
        Self {
            gesture: classify(hand, thresholds),
            pose: classify_pose(hand),
            pinch_distance: hand.pinch_distance(),
            fingers_extended: hand.fingers_extended(),
        }
    }
}

/// Resolves thresholds from the optional config file and flag overrides.
fn load_thresholds(cli: &Cli) -> Result<GestureThresholds, String> {
    let mut thresholds = match &cli.config {
        Some(path) => read_thresholds_json(path).map_err(|e| format!("{}: {}", path, e))?,
        None => GestureThresholds::default(),
    };
    if let Some(pinch) = cli.pinch_threshold {
        thresholds.pinch = pinch;
    }
    if let Some(curl_y) = cli.curl_y {
        thresholds.curl_y = curl_y;
    }
    Ok(thresholds)
}

/// Geometric hand gesture utilities.
#[derive(Parser)]
#[command(name = "hand_geometry_cli", version)]
struct Cli {
    /// JSON file with gesture thresholds
    #[arg(long, global = true)]
    config: Option<String>,
    /// Override the pinch distance threshold
    #[arg(long, global = true)]
    pinch_threshold: Option<f64>,
    /// Override the fist / open palm curl line
    #[arg(long, global = true)]
    curl_y: Option<f64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Euclidean distance between two points.
    #[command(allow_negative_numbers = true)]
    Distance {
        x1: f64,
        y1: f64,
        z1: f64,
        x2: f64,
        y2: f64,
        z2: f64,
    },
    /// Angle in degrees at vertex B formed by A-B-C.
    #[command(allow_negative_numbers = true)]
    Angle {
        ax: f64,
        ay: f64,
        az: f64,
        bx: f64,
        by: f64,
        bz: f64,
        cx: f64,
        cy: f64,
        cz: f64,
    },
    /// Unit vector in the direction of (x, y, z).
    #[command(allow_negative_numbers = true)]
    Normalize { x: f64, y: f64, z: f64 },
    /// Dot product of two vectors.
    #[command(allow_negative_numbers = true)]
    Dot {
        x1: f64,
        y1: f64,
        z1: f64,
        x2: f64,
        y2: f64,
        z2: f64,
    },
    /// Cross product of two vectors.
    #[command(allow_negative_numbers = true)]
    Cross {
        x1: f64,
        y1: f64,
        z1: f64,
        x2: f64,
        y2: f64,
        z2: f64,
    },
    /// Check whether a thumb tip and index tip are pinching.
    #[command(allow_negative_numbers = true)]
    Pinch {
        thumb_x: f64,
        thumb_y: f64,
        thumb_z: f64,
        index_x: f64,
        index_y: f64,
        index_z: f64,
    },
    /// Evaluate the fist and open palm rules on a CSV of finger points.
    Fingers { path: String },
    /// Classify a CSV file of 21 hand landmarks (x,y,z per line).
    Classify {
        path: String,
        /// Print the verdict as a JSON object.
        #[arg(long)]
        json: bool,
    },
    /// Distances between matching lines of two CSV point files.
    Batch {
        a: String,
        b: String,
        /// Write distances to this file instead of stdout.
        #[arg(long)]
        output: Option<String>,
        #[arg(long)]
        parallel: bool,
    },
    /// Time the batch evaluator on random point pairs.
    Bench {
        #[arg(long, default_value_t = 1_000_000)]
        count: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long)]
        parallel: bool,
    },
    /// Print CPU, temperature and memory readings.
    Monitor {
        /// Delay between the two CPU samples.
        #[arg(long, default_value_t = 200)]
        interval_ms: u64,
    },
    /// Write the effective thresholds to a JSON file.
    WriteConfig { path: String },
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let thresholds = match load_thresholds(&cli) {
        Ok(t) => t,
        Err(e) => fail(format!("Error reading config {}", e)),
    };
    match cli.command {
        Commands::Distance {
            x1,
            y1,
            z1,
            x2,
            y2,
            z2,
        } => {
            let d = distance(Point3::new(x1, y1, z1), Point3::new(x2, y2, z2));
            println!("Distance: {:.3}", d);
        }
        Commands::Angle {
            ax,
            ay,
            az,
            bx,
            by,
            bz,
            cx,
            cy,
            cz,
        } => match angle(
            Point3::new(ax, ay, az),
            Point3::new(bx, by, bz),
            Point3::new(cx, cy, cz),
        ) {
            Ok(deg) => println!("Angle: {:.3} deg", deg),
            Err(e) => fail(format!("Error: {}", e)),
        },
        Commands::Normalize { x, y, z } => print_point("Unit", normalize(Point3::new(x, y, z))),
        Commands::Dot {
            x1,
            y1,
            z1,
            x2,
            y2,
            z2,
        } => {
            let d = dot(Point3::new(x1, y1, z1), Point3::new(x2, y2, z2));
            println!("Dot: {:.6}", d);
        }
        Commands::Cross {
            x1,
            y1,
            z1,
            x2,
            y2,
            z2,
        } => print_point(
            "Cross",
            cross(Point3::new(x1, y1, z1), Point3::new(x2, y2, z2)),
        ),
        Commands::Pinch {
            thumb_x,
            thumb_y,
            thumb_z,
            index_x,
            index_y,
            index_z,
        } => {
            let thumb = Point3::new(thumb_x, thumb_y, thumb_z);
            let index = Point3::new(index_x, index_y, index_z);
            println!(
                "Pinch: {} (distance {:.3})",
                is_pinch_with(thumb, index, thresholds.pinch),
                distance(thumb, index)
            );
        }
        Commands::Fingers { path } => match read_points_csv(&path) {
            Ok(pts) => {
                println!("Fist: {}", is_fist_with(&pts, thresholds.curl_y));
                println!("Open palm: {}", is_palm_open_with(&pts, thresholds.curl_y));
            }
            Err(e) => fail(format!("Error reading {}: {}", path, e)),
        },
        Commands::Classify { path, json } => {
            let hand = match read_landmarks_csv(&path) {
                Ok(hand) => hand,
                Err(e) => fail(format!("Error reading {}: {}", path, e)),
            };
            let report = ClassifyReport::new(&hand, &thresholds);
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(text) => println!("{}", text),
                    Err(e) => fail(format!("Error: {}", e)),
                }
            } else {
                println!("Gesture: {}", report.gesture);
                println!("Pose: {}", report.pose);
                println!("Pinch distance: {:.3}", report.pinch_distance);
            }
        }
        Commands::Batch {
            a,
            b,
            output,
            parallel,
        } => {
            let pts_a = match read_points_csv(&a) {
                Ok(p) => p,
                Err(e) => fail(format!("Error reading {}: {}", a, e)),
            };
            let pts_b = match read_points_csv(&b) {
                Ok(p) => p,
                Err(e) => fail(format!("Error reading {}: {}", b, e)),
            };
            let result = if parallel {
                par_batch_distances(&pts_a, &pts_b)
            } else {
                batch_distances(&pts_a, &pts_b)
            };
            match (result, output) {
                (Ok(distances), Some(out)) => {
                    let rows: Vec<String> = distances.iter().map(|d| d.to_string()).collect();
                    match hand_geometry::io::write_string(&out, &(rows.join("\n") + "\n")) {
                        Ok(()) => println!("Wrote {}", out),
                        Err(e) => fail(format!("Error writing {}: {}", out, e)),
                    }
                }
                (Ok(distances), None) => {
                    for d in distances {
                        println!("{:.6}", d);
                    }
                }
                (Err(e), _) => fail(format!("Error: {}", e)),
            }
        }
        Commands::Bench {
            count,
            seed,
            parallel,
        } => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let a = random_cloud(&mut rng, count);
            let b = random_cloud(&mut rng, count);
            let start = Instant::now();
            let result = if parallel {
                par_batch_distances(&a, &b)
            } else {
                batch_distances(&a, &b)
            };
            let elapsed = start.elapsed();
            match result {
                Ok(distances) => {
                    let secs = elapsed.as_secs_f64().max(f64::EPSILON);
                    println!(
                        "Computed {} distances in {:.3} ms ({:.1} M/s)",
                        distances.len(),
                        secs * 1000.0,
                        distances.len() as f64 / secs / 1e6
                    );
                }
                Err(e) => fail(format!("Error: {}", e)),
            }
        }
        Commands::Monitor { interval_ms } => {
            let paths = ProcPaths::default();
            let mut cpu = CpuMonitor::new(paths.clone());
            cpu.poll();
            std::thread::sleep(Duration::from_millis(interval_ms));
            let usage = cpu.poll();
            let memory = MemorySnapshot::take(&paths);
            println!("CPU: {}", format_reading(usage, "%"));
            println!("Temperature: {}", format_reading(cpu_temperature(&paths), " C"));
            println!(
                "Memory: {} ({} MB available of {} MB)",
                format_reading(memory.usage_percent, "%"),
                memory.info.available_mb(),
                memory.info.total_mb()
            );
        }
        Commands::WriteConfig { path } => match write_thresholds_json(&path, &thresholds) {
            Ok(()) => println!("Wrote {}", path),
            Err(e) => fail(format!("Error writing {}: {}", path, e)),
        },
    }
}
