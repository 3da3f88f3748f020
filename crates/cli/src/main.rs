//! Command-line front end driving the Game Boy / Game Boy Color core.
//!
//! This binary is a thin collaborator around `emu_gb`: it owns the
//! filesystem (ROM loading, battery-RAM sidecar persistence, headless JPEG
//! output) and process-level concerns (logging, exit codes). The core never
//! touches any of that itself.

use anyhow::{bail, Context, Result};
use clap::Parser;
use emu_core::System;
use emu_gb::GbSystem;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// 30 seconds' worth of frames at 60 fps, for `--test`.
const TEST_FRAMES: u32 = 30 * 60;

#[derive(Parser)]
#[command(name = "emu_cli", about = "Game Boy / Game Boy Color core driver")]
struct Args {
    /// Path to a ROM file (.gb or .gbc)
    rom: Option<PathBuf>,

    /// Print version and exit
    #[arg(short = 'v', long = "version", default_value_t = false)]
    version: bool,

    /// Enable verbose CPU/Bus/PPU/Interrupt logging and the register/IO dump
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// Headless mode: run a fixed number of frames and write the final one
    /// as a JPEG to PATH
    #[arg(long, value_name = "PATH")]
    test: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.version {
        println!("emu_cli {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    init_logging(args.debug);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let emu_level = if debug { emu_core::logging::LogLevel::Trace } else { emu_core::logging::LogLevel::Off };
    emu_core::logging::LogConfig::global().set_global_level(emu_level);
}

fn run(args: &Args) -> Result<()> {
    let rom_path = args
        .rom
        .as_ref()
        .context("a ROM path is required (pass -v alone to print the version)")?;
    validate_extension(rom_path)?;

    let rom_data = fs::read(rom_path)
        .with_context(|| format!("failed to read ROM at {}", rom_path.display()))?;

    let mut system = GbSystem::new();
    system
        .mount("Cartridge", &rom_data)
        .with_context(|| format!("failed to mount {}", rom_path.display()))?;
    system.set_debug(args.debug);

    let sav_path = sidecar_save_path(rom_path);
    if system.has_battery_ram() {
        if let Ok(saved) = fs::read(&sav_path) {
            system.load_battery_ram(&saved);
            log::info!("loaded battery RAM from {}", sav_path.display());
        }
    }

    let run_result: Result<()> = if let Some(test_path) = &args.test {
        run_headless_test(&mut system, test_path)
    } else {
        // Interactive presentation (windowing, audio output) is a host
        // concern outside this crate's scope; step one frame to exercise
        // the core end to end and report what it produced.
        system.step_frame().map_err(anyhow::Error::from).map(|frame| {
            log::info!("stepped one frame: {}x{}", frame.width, frame.height);
        })
    };

    if run_result.is_err() && args.debug {
        eprintln!("{}", system.debug_dump());
    } else if args.debug {
        println!("{}", system.debug_dump());
    }
    run_result?;

    if system.has_battery_ram() {
        if let Some(data) = system.battery_ram() {
            fs::write(&sav_path, &data).with_context(|| {
                format!("failed to write battery RAM to {}", sav_path.display())
            })?;
            log::info!("saved battery RAM to {}", sav_path.display());
        }
    }

    Ok(())
}

fn validate_extension(path: &Path) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if ext.eq_ignore_ascii_case("gb") || ext.eq_ignore_ascii_case("gbc") {
        Ok(())
    } else {
        bail!("unsupported ROM extension {:?}; expected .gb or .gbc", ext)
    }
}

/// `<rom>.sav`, i.e. the full ROM filename with `.sav` appended, not the ROM
/// extension replaced.
fn sidecar_save_path(rom_path: &Path) -> PathBuf {
    let mut name = rom_path.as_os_str().to_owned();
    name.push(".sav");
    PathBuf::from(name)
}

fn run_headless_test(system: &mut GbSystem, out_path: &Path) -> Result<()> {
    for _ in 0..TEST_FRAMES {
        system.step_frame()?;
    }

    // The captured frame hardcodes WX=WY=SCX=SCY=0 so the JPEG doesn't depend
    // on whatever scroll position the ROM happened to leave the registers in
    // after TEST_FRAMES frames.
    let frame = system.fixed_scroll_frame();

    let mut image = image::RgbImage::new(frame.width, frame.height);
    for (i, argb) in frame.pixels.iter().enumerate() {
        let x = (i as u32) % frame.width;
        let y = (i as u32) / frame.width;
        let [_a, r, g, b] = argb.to_be_bytes();
        image.put_pixel(x, y, image::Rgb([r, g, b]));
    }

    image
        .save_with_format(out_path, image::ImageFormat::Jpeg)
        .with_context(|| format!("failed to write JPEG to {}", out_path.display()))?;
    log::info!("wrote final frame to {}", out_path.display());

    Ok(())
}
