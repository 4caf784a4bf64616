//! lux - demo front-end for the ray tracer.
//!
//! Picks a scene from the catalogue by number, renders it, and writes a TGA
//! or PNG file.

mod output;
mod scenes;

use std::env;
use std::path::Path;
use std::time::Instant;

use anyhow::{anyhow, bail, Context, Result};
use lux_render::{render, render_antialiased};

const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;
const DEFAULT_SAMPLES: u32 = 4;
const DEFAULT_OUTPUT: &str = "raytracing_scene.tga";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("missing arguments (try -h for help)");
        print_usage(&args[0]);
        std::process::exit(1);
    }

    if args[1] == "-h" || args[1] == "--help" {
        print_usage(&args[0]);
        print_scene_list();
        return Ok(());
    }

    let scene_number: u32 = args[1]
        .parse()
        .with_context(|| format!("'{}' is not a scene number (try -h for help)", args[1]))?;

    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut samples = DEFAULT_SAMPLES;
    let mut output_path = DEFAULT_OUTPUT.to_string();

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                output_path = args
                    .get(i)
                    .ok_or_else(|| anyhow!("{} needs a file name", args[i - 1]))?
                    .clone();
            }
            "--width" => {
                i += 1;
                width = parse_flag(&args, i, "--width")?;
            }
            "--height" => {
                i += 1;
                height = parse_flag(&args, i, "--height")?;
            }
            "--samples" => {
                i += 1;
                samples = parse_flag(&args, i, "--samples")?;
                if samples == 0 {
                    bail!("--samples must be at least 1");
                }
            }
            other => bail!("unknown argument: {}", other),
        }
        i += 1;
    }

    let scene = scenes::build(scene_number)
        .ok_or_else(|| anyhow!("no scene associated with number {}", scene_number))?;

    log::info!("scene {}: {}", scene_number, scenes::description(scene_number));

    let start = Instant::now();
    let buffer = if samples > 1 {
        render_antialiased(&scene, width, height, samples)
    } else {
        render(&scene, width, height)
    };
    log::info!("rendered in {:.2?}", start.elapsed());

    output::save(Path::new(&output_path), &buffer, width, height)
        .with_context(|| format!("failed to write {}", output_path))?;
    log::info!("wrote {}", output_path);

    Ok(())
}

fn parse_flag(args: &[String], i: usize, flag: &str) -> Result<u32> {
    args.get(i)
        .ok_or_else(|| anyhow!("{} needs a value", flag))?
        .parse()
        .with_context(|| format!("{} needs a positive integer", flag))
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} <scene> [-o FILE] [--width N] [--height N] [--samples N]",
        program
    );
    eprintln!("  defaults: {}x{}, {} samples per axis, output '{}'", DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_SAMPLES, DEFAULT_OUTPUT);
    eprintln!("  --samples 1 renders one ray per pixel (no anti-aliasing)");
}

fn print_scene_list() {
    eprintln!("available scenes:");
    for number in 1..=scenes::count() {
        eprintln!("  {} - {}", number, scenes::description(number));
    }
}
