use std::env;
use std::fs;
use std::path::PathBuf;

use formats::{ViewerConfig, config_from_str, regions_from_geojson_str};
use runtime::PointerEvent;
use tracing::info;
use tracing_subscriber::EnvFilter;
use viewer::MapView;

const DEFAULT_WINDOW: (f64, f64) = (800.0, 600.0);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "inspect" => cmd_inspect(args),
        "pick" => cmd_pick(args),
        _ => Err(usage()),
    }
}

fn cmd_inspect(args: Vec<String>) -> Result<(), String> {
    // choromap inspect <boundary.json> [--config CONFIG]
    let (positional, config) = split_args(args)?;
    let [boundary_path] = positional.as_slice() else {
        return Err(usage());
    };

    let (width, height) = DEFAULT_WINDOW;
    let mut view = MapView::new(&config, width, height);
    let loaded = load_boundary(boundary_path)?;
    let built = view.load_regions(&loaded);
    info!(loaded = loaded.len(), built = built.len(), "boundary ingested");

    println!(
        "{} regions loaded, {} built ({} rejected)",
        loaded.len(),
        built.len(),
        loaded.len() - built.len()
    );
    for id in built {
        let Some(record) = view.world().region(id) else {
            continue;
        };
        let center = match record.center {
            Some(c) => format!("({:.3}, {:.3})", c.x, c.y),
            None => "-".to_string(),
        };
        println!(
            "  {:<12} solids={} outlines={} decor={} center={}",
            record.name,
            record.solids.len(),
            record.outlines.len(),
            record.decors.len(),
            center
        );
    }
    Ok(())
}

fn cmd_pick(args: Vec<String>) -> Result<(), String> {
    // choromap pick <boundary.json> <x_px> <y_px> [--config CONFIG]
    let (positional, config) = split_args(args)?;
    let [boundary_path, x_px, y_px] = positional.as_slice() else {
        return Err(usage());
    };
    let x_px: f64 = x_px.parse().map_err(|_| format!("bad x: {x_px}"))?;
    let y_px: f64 = y_px.parse().map_err(|_| format!("bad y: {y_px}"))?;

    let (width, height) = DEFAULT_WINDOW;
    let mut view = MapView::new(&config, width, height);
    let loaded = load_boundary(boundary_path)?;
    view.load_regions(&loaded);

    view.handle_pointer(PointerEvent::Move { x_px, y_px });
    let label = view.tick();
    if label.visible {
        println!("({x_px}, {y_px}) -> {}", label.text);
    } else {
        println!("({x_px}, {y_px}) -> no region");
    }
    Ok(())
}

fn load_boundary(path: &str) -> Result<Vec<regions::GeoRegion>, String> {
    let payload =
        fs::read_to_string(PathBuf::from(path)).map_err(|e| format!("read {path}: {e}"))?;
    regions_from_geojson_str(&payload).map_err(|e| format!("decode {path}: {e}"))
}

fn split_args(args: Vec<String>) -> Result<(Vec<String>, ViewerConfig), String> {
    let mut positional = Vec::new();
    let mut config = ViewerConfig::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let path = args.get(i).ok_or("--config requires a value")?;
                let payload =
                    fs::read_to_string(path).map_err(|e| format!("read {path}: {e}"))?;
                config = config_from_str(&payload).map_err(|e| e.to_string())?;
            }
            s if s.starts_with('-') => {
                return Err(format!("unknown arg: {s}\n\n{}", usage()));
            }
            _ => positional.push(args[i].clone()),
        }
        i += 1;
    }

    Ok((positional, config))
}

fn usage() -> String {
    [
        "usage:",
        "  choromap inspect <boundary.json> [--config CONFIG]",
        "  choromap pick <boundary.json> <x_px> <y_px> [--config CONFIG]",
    ]
    .join("\n")
}
